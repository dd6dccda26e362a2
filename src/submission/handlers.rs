use super::service::submit_text;
use super::types::{CreateTextRequest, IDEMPOTENCY_KEY_HEADER};
use super::validation::parse_idempotency_key;
use crate::error::TextError;
use crate::idempotency::ledger::IdempotencyLedger;
use crate::idempotency::types::Reconciled;
use crate::storage::memory::RecordStore;
use crate::storage::types::TextRecord;

use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_create_text(
    Extension(store): Extension<Arc<RecordStore>>,
    Extension(ledger): Extension<Arc<IdempotencyLedger>>,
    headers: HeaderMap,
    payload: Result<Json<CreateTextRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TextRecord>), TextError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!("Rejected create request body: {}", rejection);
        TextError::InvalidBody(rejection.body_text())
    })?;
    let key = parse_idempotency_key(headers.get(IDEMPOTENCY_KEY_HEADER))?;

    match submit_text(&store, &ledger, &req.text, key.as_deref()) {
        Ok(Reconciled::Created(record)) => {
            tracing::info!("Created text {}", record.id);
            Ok((StatusCode::CREATED, Json(record)))
        }
        Ok(Reconciled::Replayed(record)) => {
            tracing::debug!("Replayed text {} for idempotency key", record.id);
            Ok((StatusCode::OK, Json(record)))
        }
        Err(e) => {
            tracing::warn!("Failed to create text: {}", e);
            Err(e)
        }
    }
}
