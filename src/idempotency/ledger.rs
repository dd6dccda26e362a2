use super::types::{IdempotencyEntry, Reconciled};
use crate::error::{Result, TextError};
use crate::storage::types::TextRecord;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Mapping from idempotency key to the first request made with it.
#[derive(Debug, Default)]
pub struct IdempotencyLedger {
    entries: DashMap<String, IdempotencyEntry>,
}

impl IdempotencyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry bound to `key`, if any.
    pub fn lookup(&self, key: &str) -> Option<IdempotencyEntry> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Binds an unseen key.
    ///
    /// Returns `false` without touching the existing entry when `key` is already bound.
    pub fn bind(&self, key: &str, request_text: &str, response: TextRecord) -> bool {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(IdempotencyEntry {
                    key: key.to_string(),
                    request_text: request_text.to_string(),
                    response,
                });
                true
            }
        }
    }

    /// Atomic lookup, create and bind for a single key.
    ///
    /// The key's slot stays locked while `create` runs, so `create` is invoked at
    /// most once per key no matter how many callers race on it. `create` must not
    /// touch this ledger.
    pub fn reconcile<F>(&self, key: &str, request_text: &str, create: F) -> Result<Reconciled>
    where
        F: FnOnce() -> TextRecord,
    {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(entry) => {
                let existing = entry.get();
                if existing.request_text != request_text {
                    return Err(TextError::IdempotencyConflict {
                        key: key.to_string(),
                    });
                }
                Ok(Reconciled::Replayed(existing.response.clone()))
            }
            Entry::Vacant(slot) => {
                let record = create();
                slot.insert(IdempotencyEntry {
                    key: key.to_string(),
                    request_text: request_text.to_string(),
                    response: record.clone(),
                });
                Ok(Reconciled::Created(record))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
