use crate::storage::types::TextRecord;

/// What the ledger remembers about the first use of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdempotencyEntry {
    pub key: String,
    /// The exact text submitted on first use.
    pub request_text: String,
    /// Copy of the record created on first use, returned on replay.
    pub response: TextRecord,
}

/// Outcome of reconciling a keyed submission against the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    /// The key was unseen; a record was created and the key bound to it.
    Created(TextRecord),
    /// The key was already bound to the same text; the original record is returned.
    Replayed(TextRecord),
}

impl Reconciled {
    pub fn record(&self) -> &TextRecord {
        match self {
            Reconciled::Created(record) | Reconciled::Replayed(record) => record,
        }
    }

    pub fn into_record(self) -> TextRecord {
        match self {
            Reconciled::Created(record) | Reconciled::Replayed(record) => record,
        }
    }

    pub fn is_replay(&self) -> bool {
        matches!(self, Reconciled::Replayed(_))
    }
}
