use super::types::TextRecord;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-wide, insertion-ordered collection of text records.
///
/// Writers take the lock only for the duration of a single `push`, so a
/// poisoned lock never leaves the vector half-updated and is recovered.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<Vec<TextRecord>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<TextRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<TextRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates a record with a fresh id, appends it and returns a copy.
    pub fn insert(&self, text: impl Into<String>) -> TextRecord {
        let record = TextRecord::new(text);
        self.write().push(record.clone());
        tracing::debug!("Stored record {}", record.id);
        record
    }

    /// Returns every record whose text contains `needle`, ignoring case, in insertion order.
    pub fn find_containing(&self, needle: &str) -> Vec<TextRecord> {
        let needle = needle.to_lowercase();
        self.read()
            .iter()
            .filter(|record| record.text.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
