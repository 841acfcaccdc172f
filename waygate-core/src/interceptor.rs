//! The interception capability and chain continuation.

use async_trait::async_trait;
use futures::future::BoxFuture;
use http::Response;

use crate::body::GatewayBody;
use crate::error::GatewayError;
use crate::exchange::Exchange;

/// Result of running an interceptor or the rest of the chain.
pub type InterceptorResult<B> = Result<Response<GatewayBody<B>>, GatewayError>;

/// A unit of request/response processing inserted into the gateway's chain.
///
/// Implementations either short-circuit by building a response themselves or
/// hand the exchange to [`Next`] and (optionally) post-process what comes back.
///
/// # Examples
///
/// ```rust,ignore
/// struct Passthrough;
///
/// #[async_trait]
/// impl<B: Send + 'static> Interceptor<B> for Passthrough {
///     async fn intercept(&self, exchange: Exchange<B>, next: Next<B>) -> InterceptorResult<B> {
///         next.run(exchange).await
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor<B>: Send + Sync {
    /// Processes one exchange, forwarding to `next` unless short-circuiting.
    async fn intercept(&self, exchange: Exchange<B>, next: Next<B>) -> InterceptorResult<B>;

    /// Position in the chain relative to other interceptors; lower runs earlier.
    fn order(&self) -> i32 {
        0
    }
}

/// The rest of the chain, as a one-shot continuation.
///
/// The gateway's dispatch engine builds a `Next` for each interceptor
/// invocation; an interceptor that forwards calls [`Next::run`] exactly once.
pub struct Next<B> {
    inner: Box<dyn FnOnce(Exchange<B>) -> BoxFuture<'static, InterceptorResult<B>> + Send>,
}

impl<B> Next<B> {
    /// Wraps a continuation function.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: FnOnce(Exchange<B>) -> Fut + Send + 'static,
        Fut: Future<Output = InterceptorResult<B>> + Send + 'static,
    {
        Next {
            inner: Box::new(move |exchange| Box::pin(f(exchange))),
        }
    }

    /// Runs the remainder of the chain with the (possibly mutated) exchange.
    pub async fn run(self, exchange: Exchange<B>) -> InterceptorResult<B> {
        (self.inner)(exchange).await
    }
}

impl<B> std::fmt::Debug for Next<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Next")
    }
}
