//! Text Snippet Service Library
//!
//! This library crate defines the core modules of the snippet service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`storage`**: The append-only, in-memory record store and its stats endpoint.
//! - **`idempotency`**: The ledger mapping client idempotency keys to their first request
//!   and the record it produced. Provides the atomic get-or-create primitive.
//! - **`submission`**: Validation and the create-text pipeline (`POST /texts`).
//! - **`search`**: Case-insensitive substring search over stored texts (`GET /texts`).
//! - **`app`**: Router construction and the shared application state.
//! - **`config`**: Runtime settings from defaults, environment and flags.
//! - **`error`**: The error type shared by every handler and its HTTP mapping.

pub mod app;
pub mod config;
pub mod error;
pub mod idempotency;
pub mod search;
pub mod storage;
pub mod submission;
