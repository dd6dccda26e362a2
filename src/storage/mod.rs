//! Record Storage Module
//!
//! Holds every text record created by the service for the lifetime of the process.
//!
//! ## Core Concepts
//! - **Append-only**: Records are only ever added. There is no update or delete path.
//! - **Identity**: Each record receives a random UUID at creation time.
//! - **Ordering**: Records are kept in insertion order, which is also the order search results use.
//! - **Sharing**: `RecordStore` is wrapped in an `Arc` and handed to handlers through an `Extension` layer.

pub mod handlers;
pub mod memory;
pub mod types;
