//! Per-request upstream host override.

use async_trait::async_trait;
use http::Uri;
use http::header::HOST;
use http::uri::Authority;
use tracing::{debug, warn};
use waygate_core::{Exchange, Interceptor, InterceptorResult, Next};

/// Rewrites the resolved route's target authority from the request's `host`
/// header before the chain proceeds.
///
/// When the header is present and non-empty and a route has been resolved,
/// the route is replaced by a copy whose URI carries the header value as its
/// host. Scheme, path, and query are preserved; the original port is kept
/// unless the header value carries its own `host:port`. In every other case
/// the exchange passes through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostRewriteInterceptor;

impl HostRewriteInterceptor {
    /// Creates the interceptor.
    pub fn new() -> Self {
        HostRewriteInterceptor
    }
}

#[async_trait]
impl<B> Interceptor<B> for HostRewriteInterceptor
where
    B: Send + 'static,
{
    async fn intercept(&self, mut exchange: Exchange<B>, next: Next<B>) -> InterceptorResult<B> {
        let host = exchange
            .request()
            .headers()
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .filter(|host| !host.is_empty())
            .map(str::to_owned);
        let Some(host) = host else {
            return next.run(exchange).await;
        };

        let rerouted = match exchange.route() {
            Some(route) => match override_authority(route.uri(), &host) {
                Ok(uri) => {
                    debug!(route = route.id(), %uri, "host override applied");
                    Some(route.with_uri(uri))
                }
                Err(error) => {
                    warn!(%host, %error, "host override ignored, header value is not a valid authority");
                    None
                }
            },
            None => None,
        };
        if let Some(route) = rerouted {
            exchange.set_route(route);
        }

        next.run(exchange).await
    }
}

/// Builds a URI identical to `uri` except for its authority's host.
///
/// A bare hostname keeps the original port; a `host:port` value replaces both.
fn override_authority(uri: &Uri, host: &str) -> Result<Uri, http::Error> {
    let authority = match uri.port_u16() {
        Some(port) if !host.contains(':') => format!("{host}:{port}").parse::<Authority>()?,
        _ => host.parse::<Authority>()?,
    };
    let mut parts = uri.clone().into_parts();
    parts.authority = Some(authority);
    Ok(Uri::from_parts(parts)?)
}
