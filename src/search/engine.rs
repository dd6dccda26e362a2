use crate::error::{Result, TextError};
use crate::storage::memory::RecordStore;
use crate::storage::types::TextRecord;

/// Returns every stored record containing `query`, ignoring case.
///
/// A missing or whitespace-only query is rejected. The query itself is matched
/// as given, surrounding whitespace included.
pub fn search(query: Option<&str>, store: &RecordStore) -> Result<Vec<TextRecord>> {
    let query = match query {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Err(TextError::QueryRequired),
    };
    Ok(store.find_containing(query))
}
