use super::engine::search;
use super::types::SearchParams;
use crate::error::TextError;
use crate::storage::memory::RecordStore;
use crate::storage::types::TextRecord;

use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Extension(store): Extension<Arc<RecordStore>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<TextRecord>>, TextError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::warn!("Rejected search query: {}", rejection);
        TextError::InvalidQuery(rejection.body_text())
    })?;

    match search(params.contains.as_deref(), &store) {
        Ok(results) => {
            tracing::debug!(
                "Search {:?} matched {} texts",
                params.contains,
                results.len()
            );
            Ok(Json(results))
        }
        Err(e) => {
            tracing::warn!("Rejected search: {}", e);
            Err(e)
        }
    }
}
