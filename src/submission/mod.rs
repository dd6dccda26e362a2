//! Submission Module
//!
//! Accepts new text snippets over HTTP and turns them into stored records.
//!
//! ## Workflow
//! 1. **Validate**: The text must contain a non-whitespace character and be at most
//!    280 characters long. Failures never touch shared state.
//! 2. **Reconcile**: With an `Idempotency-Key`, the ledger decides between creating,
//!    replaying or rejecting with a conflict, all inside one critical section.
//! 3. **Store**: Without a key every submission creates a new record.

pub mod handlers;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;
