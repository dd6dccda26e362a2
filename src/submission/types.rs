use serde::Deserialize;

/// Name of the optional request header carrying the client's idempotency key.
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

/// Body of `POST /texts`.
#[derive(Debug, Deserialize)]
pub struct CreateTextRequest {
    pub text: String,
}
