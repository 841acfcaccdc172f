//! Response capture sink for the cache miss path.

use std::sync::Arc;

use http::Response;
use http_body::Body as HttpBody;
use http_body_util::BodyExt;
use tracing::{debug, warn};
use waygate_core::{BoxError, GatewayBody, GatewayError, InterceptorResult};
use waygate_store::KeyValueStore;

use crate::key::CacheKey;

/// Buffers a complete upstream response body and conditionally persists it.
///
/// The capture consumes the body fully before anything moves downstream: the
/// success check and the store write both need the complete body, so the
/// original chunk stream is replaced by one combined buffered chunk. Chunk
/// order is preserved. This trades first-byte latency for correctness on the
/// miss path.
pub struct ResponseCapture<S> {
    store: Arc<S>,
    key: CacheKey,
}

impl<S> ResponseCapture<S>
where
    S: KeyValueStore,
{
    /// Binds a capture to the store and the key derived for this request.
    pub fn new(store: Arc<S>, key: CacheKey) -> Self {
        ResponseCapture { store, key }
    }

    /// Buffers the response body, writes it back on 2xx, and re-emits it.
    ///
    /// A store failure during the write-back is reported but never
    /// client-visible; the buffered bytes are delivered regardless of status.
    /// A body read failure aborts the capture before any write-back.
    pub async fn capture<B>(self, response: Response<GatewayBody<B>>) -> InterceptorResult<B>
    where
        B: HttpBody + Send,
        B::Error: Into<BoxError>,
    {
        let (parts, body) = response.into_parts();
        let buffered = body
            .collect()
            .await
            .map_err(|error| GatewayError::BodyRead(error.into()))?
            .to_bytes();

        if parts.status.is_success() {
            if let Err(error) = self.store.set(self.key.as_str(), buffered.clone()).await {
                warn!(
                    store = self.store.name(),
                    key = %self.key,
                    %error,
                    "cache write-back failed, response delivered uncached"
                );
            } else {
                debug!(key = %self.key, bytes = buffered.len(), "cached upstream response");
            }
        }

        Ok(Response::from_parts(parts, GatewayBody::complete(buffered)))
    }
}
