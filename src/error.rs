use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Maximum number of characters a stored text may contain.
pub const MAX_TEXT_LENGTH: usize = 280;

/// Unified result type for the snippet service.
pub type Result<T> = std::result::Result<T, TextError>;

/// Broad classes of failure, each mapped to a single HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-policy input (400).
    Validation,
    /// Idempotency key reused with a different payload (409).
    Conflict,
}

/// Errors produced while submitting or searching texts.
///
/// Every variant is terminal for the request that produced it: no state has
/// been mutated by the time one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("Text must contain at least one non-whitespace character")]
    EmptyText,

    #[error("Text exceeds the maximum length of {max} characters")]
    TooLong { max: usize },

    #[error("Query parameter 'contains' is required for search")]
    QueryRequired,

    #[error("Idempotency-Key header must contain visible ASCII characters only")]
    InvalidIdempotencyKey,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("This Idempotency-Key was already used for a different text. Please use a new key")]
    IdempotencyConflict { key: String },
}

impl TextError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TextError::IdempotencyConflict { .. } => ErrorKind::Conflict,
            _ => ErrorKind::Validation,
        }
    }

    /// Stable machine-readable code placed in the error payload.
    pub fn code(&self) -> &'static str {
        match self {
            TextError::EmptyText => "empty_text",
            TextError::TooLong { .. } => "text_too_long",
            TextError::QueryRequired => "query_required",
            TextError::InvalidIdempotencyKey => "invalid_idempotency_key",
            TextError::InvalidBody(_) => "invalid_body",
            TextError::InvalidQuery(_) => "invalid_query",
            TextError::IdempotencyConflict { .. } => "idempotency_conflict",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
        }
    }
}

/// JSON payload returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

impl IntoResponse for TextError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self.code().to_string(),
            detail: self.to_string(),
        };
        (self.status(), Json(payload)).into_response()
    }
}
