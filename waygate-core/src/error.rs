//! Error types for interceptor execution.

use thiserror::Error;

/// Type-erased error used at the chain boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by an interceptor or by the chain continuation.
///
/// Store interaction failures are deliberately absent: the caching interceptor
/// fails open on lookup errors and reports write-back errors through tracing,
/// so they never reach the client (see `waygate::CachingInterceptor`).
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The chain continuation (upstream dispatch) failed.
    #[error("upstream call failed")]
    Upstream(#[source] BoxError),

    /// Reading the upstream response body failed before anything was
    /// delivered to the client.
    #[error("failed to read upstream response body")]
    BodyRead(#[source] BoxError),
}
