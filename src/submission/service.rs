use super::validation::validate_text;
use crate::error::Result;
use crate::idempotency::ledger::IdempotencyLedger;
use crate::idempotency::types::Reconciled;
use crate::storage::memory::RecordStore;

/// Runs the full create-text contract.
///
/// Validation happens before any lock is taken. Keyed submissions go through
/// `IdempotencyLedger::reconcile`, which covers lookup, insert and bind as one
/// critical section for that key.
pub fn submit_text(
    store: &RecordStore,
    ledger: &IdempotencyLedger,
    text: &str,
    idempotency_key: Option<&str>,
) -> Result<Reconciled> {
    validate_text(text)?;

    match idempotency_key {
        None => Ok(Reconciled::Created(store.insert(text))),
        Some(key) => ledger.reconcile(key, text, || store.insert(text)),
    }
}
