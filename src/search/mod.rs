//! Search Service Module
//!
//! Answers `GET /texts?contains=...` by scanning the record store.
//!
//! ## Behaviour
//! - **Query**: `contains` is required and must not be blank.
//! - **Matching**: Case-insensitive substring containment on the stored text.
//! - **Ordering**: Results come back in insertion order.
//! - **Empty results**: Returned as an empty JSON array with status 200.
//!
//! ## Submodules
//! - **`engine`**: Query validation and matching.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Query parameter types.

pub mod engine;
pub mod handlers;
pub mod types;
