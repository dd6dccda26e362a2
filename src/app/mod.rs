//! HTTP Application
//!
//! Wires the shared stores into the Axum router. Both stores are built once at
//! startup and handed to every handler through `Extension` layers.

use crate::idempotency::ledger::IdempotencyLedger;
use crate::search::handlers::handle_search;
use crate::storage::handlers::handle_stats;
use crate::storage::memory::RecordStore;
use crate::submission::handlers::handle_create_text;

use axum::Router;
use axum::extract::Extension;
use axum::routing::get;
use std::sync::Arc;

pub const ENDPOINT_TEXTS: &str = "/texts";
pub const ENDPOINT_STATS: &str = "/stats";

/// Process-wide state shared by all handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub ledger: Arc<IdempotencyLedger>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn build_router(state: &AppState) -> Router {
    Router::new()
        .route(
            ENDPOINT_TEXTS,
            get(handle_search).post(handle_create_text),
        )
        .route(ENDPOINT_STATS, get(handle_stats))
        .layer(Extension(state.store.clone()))
        .layer(Extension(state.ledger.clone()))
}
