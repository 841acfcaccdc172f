#![warn(missing_docs)]
//! # waygate-redis
//!
//! Redis implementation of the Waygate [`KeyValueStore`].
//!
//! Values are stored as plain string keys holding raw body bytes, matching the
//! `EXISTS` / `GET` / `SET` protocol the caching interceptor consumes. The
//! connection is established lazily on first use via a shared
//! [`ConnectionManager`](redis::aio::ConnectionManager).
//!
//! [`KeyValueStore`]: waygate_store::KeyValueStore

pub mod error;
pub mod store;

pub use crate::error::Error;
pub use crate::store::{RedisStore, RedisStoreBuilder};
