//! Read-through response caching interceptor.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{Response, StatusCode};
use http_body::Body as HttpBody;
use tracing::{debug, warn};
use waygate_core::{BoxError, Exchange, GatewayBody, Interceptor, InterceptorResult, Next};
use waygate_store::KeyValueStore;

use crate::capture::ResponseCapture;
use crate::config::CacheConfig;
use crate::key::CacheKey;

/// Content type assumed for cached bodies; no metadata is persisted beside
/// the raw bytes, so every hit is served with this fixed header.
const CACHED_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Serves previously captured response bodies from a [`KeyValueStore`];
/// otherwise forwards the request and persists the upstream body for reuse.
///
/// Per request, the key is looked up at most once and written at most once.
/// Store failures during lookup fail open: the request proceeds to upstream
/// as if the key were absent.
pub struct CachingInterceptor<S> {
    store: Arc<S>,
    config: CacheConfig,
}

impl<S> CachingInterceptor<S>
where
    S: KeyValueStore,
{
    /// Chain position: before the upstream-dispatch stage, wrapping around
    /// other response-mutating interceptors.
    pub const ORDER: i32 = -2;

    /// Creates the interceptor over a shared store.
    pub fn new(store: Arc<S>, config: CacheConfig) -> Self {
        CachingInterceptor { store, config }
    }

    /// Looks up the key, failing open on any store error.
    async fn lookup(&self, key: &CacheKey) -> Option<Bytes> {
        match self.store.exists(key.as_str()).await {
            Ok(true) => {}
            Ok(false) => return None,
            Err(error) => {
                warn!(
                    store = self.store.name(),
                    key = %key,
                    %error,
                    "cache existence check failed, passing through to upstream"
                );
                return None;
            }
        }
        match self.store.get(key.as_str()).await {
            Ok(Some(data)) => Some(data),
            // Entry vanished between the existence check and the read.
            Ok(None) => None,
            Err(error) => {
                warn!(
                    store = self.store.name(),
                    key = %key,
                    %error,
                    "cache read failed, passing through to upstream"
                );
                None
            }
        }
    }
}

fn hit_response<B>(data: Bytes) -> Response<GatewayBody<B>>
where
    B: HttpBody,
{
    let mut response = Response::new(GatewayBody::complete(data));
    *response.status_mut() = StatusCode::OK;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(CACHED_CONTENT_TYPE));
    response
}

#[async_trait]
impl<S, B> Interceptor<B> for CachingInterceptor<S>
where
    S: KeyValueStore + 'static,
    B: HttpBody + Send + 'static,
    B::Error: Into<BoxError> + Send,
{
    async fn intercept(&self, exchange: Exchange<B>, next: Next<B>) -> InterceptorResult<B> {
        let key = CacheKey::derive(self.config.key_prefix(), exchange.request().uri().path());

        if let Some(data) = self.lookup(&key).await {
            debug!(key = %key, bytes = data.len(), "cache hit, upstream skipped");
            return Ok(hit_response(data));
        }

        debug!(key = %key, "cache miss, forwarding to upstream");
        let response = next.run(exchange).await?;
        ResponseCapture::new(Arc::clone(&self.store), key)
            .capture(response)
            .await
    }

    fn order(&self) -> i32 {
        Self::ORDER
    }
}
