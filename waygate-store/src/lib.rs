#![warn(missing_docs)]
//! # waygate-store
//!
//! Key-value store abstraction consumed by the Waygate caching interceptor.
//!
//! The interceptor needs three operations: `exists`, `get`, and `set` over
//! raw byte values. Anything beyond that — persistence, replication,
//! eviction, expiry — is the store's own concern and is deliberately not
//! expressed here.
//!
//! If you want to implement your own store, you are in the right place.

mod error;
pub mod memory;
mod store;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use store::{KeyValueStore, StoreResult};
