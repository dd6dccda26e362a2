//! Idempotency Module
//!
//! Deduplicates retried submissions that carry a client-supplied `Idempotency-Key`.
//!
//! ## Core Concepts
//! - **Binding**: The first successful submission under a key binds that key to the
//!   submitted text and the record it produced.
//! - **Replay**: A later submission with the same key and identical text receives the
//!   bound record again; nothing new is stored.
//! - **Conflict**: A later submission with the same key and different text is rejected.
//! - **Atomicity**: `IdempotencyLedger::reconcile` holds the key's map slot while it
//!   checks, creates and binds, so concurrent retries cannot both create a record.
//!
//! Entries are never evicted; the ledger grows with the number of distinct keys.

pub mod ledger;
pub mod types;
