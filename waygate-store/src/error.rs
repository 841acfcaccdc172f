//! Error types for store operations.

use thiserror::Error;

/// Error type for key-value store operations.
///
/// Categorizes failures into distinct groups so that callers can make
/// fail-open decisions uniformly across store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Internal store error, state or computation error.
    ///
    /// Any error not related to network interaction.
    #[error(transparent)]
    Internal(Box<dyn std::error::Error + Send>),

    /// Network interaction error.
    ///
    /// Errors occurring during communication with remote stores (e.g., Redis).
    #[error(transparent)]
    Connection(Box<dyn std::error::Error + Send>),
}
