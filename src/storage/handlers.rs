use axum::{Extension, Json, http::StatusCode};
use std::sync::Arc;

use super::memory::RecordStore;
use super::types::StatsResponse;
use crate::idempotency::ledger::IdempotencyLedger;

pub async fn handle_stats(
    Extension(store): Extension<Arc<RecordStore>>,
    Extension(ledger): Extension<Arc<IdempotencyLedger>>,
) -> (StatusCode, Json<StatsResponse>) {
    (
        StatusCode::OK,
        Json(StatsResponse {
            records: store.len(),
            idempotency_keys: ledger.len(),
        }),
    )
}
