//! Error types for Redis store operations.

use redis::RedisError;
use waygate_store::StoreError;

/// Error type for Redis store operations.
///
/// Wraps errors from the underlying [`redis`] crate. In most cases this error
/// is converted to [`StoreError`] and handled by the caching interceptor's
/// fail-open policy rather than reaching application code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error from the underlying Redis client.
    ///
    /// This includes connection failures, protocol errors, authentication
    /// failures, and command execution errors.
    #[error("Redis store error: {0}")]
    Redis(#[from] RedisError),
}

impl From<Error> for StoreError {
    fn from(error: Error) -> Self {
        Self::Connection(Box::new(error))
    }
}
