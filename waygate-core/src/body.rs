//! Response body states for interceptor output.
//!
//! Interceptors either build a response themselves (a cache hit, a buffered
//! capture) or forward the upstream stream untouched. [`GatewayBody`] covers
//! both states behind one `http_body::Body` implementation:
//!
//! - **Complete**: the body was fully buffered and is emitted as a single chunk
//! - **Passthrough**: the upstream stream is forwarded without inspection

use bytes::{Buf, Bytes};
use http_body::{Body as HttpBody, Frame};
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A response body that is either fully buffered or streamed through.
#[pin_project(project = GatewayBodyProj)]
#[derive(Debug)]
pub enum GatewayBody<B> {
    /// Fully buffered body, yielded as one chunk.
    ///
    /// The `Option` is used to yield the data once, then return `None` on
    /// subsequent polls.
    Complete(Option<Bytes>),

    /// Untouched upstream stream, forwarded frame by frame.
    Passthrough(#[pin] B),
}

impl<B> GatewayBody<B>
where
    B: HttpBody,
{
    /// Creates a fully buffered body from a contiguous byte sequence.
    pub fn complete(data: impl Into<Bytes>) -> Self {
        GatewayBody::Complete(Some(data.into()))
    }

    /// Creates an empty, already-ended body.
    pub fn empty() -> Self {
        GatewayBody::Complete(None)
    }
}

impl<B> HttpBody for GatewayBody<B>
where
    B: HttpBody,
{
    type Data = Bytes;
    type Error = B::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        match self.project() {
            GatewayBodyProj::Complete(data) => {
                if let Some(bytes) = data.take() {
                    Poll::Ready(Some(Ok(Frame::data(bytes))))
                } else {
                    Poll::Ready(None)
                }
            }
            GatewayBodyProj::Passthrough(body) => {
                // Delegate to the inner body and convert the data type
                match body.poll_frame(cx) {
                    Poll::Ready(Some(Ok(frame))) => {
                        let frame = frame.map_data(|mut data| data.copy_to_bytes(data.remaining()));
                        Poll::Ready(Some(Ok(frame)))
                    }
                    Poll::Ready(Some(Err(e))) => Poll::Ready(Some(Err(e))),
                    Poll::Ready(None) => Poll::Ready(None),
                    Poll::Pending => Poll::Pending,
                }
            }
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self {
            GatewayBody::Complete(Some(bytes)) => http_body::SizeHint::with_exact(bytes.len() as u64),
            GatewayBody::Complete(None) => http_body::SizeHint::with_exact(0),
            GatewayBody::Passthrough(body) => body.size_hint(),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            GatewayBody::Complete(None) => true,
            GatewayBody::Complete(Some(_)) => false,
            GatewayBody::Passthrough(body) => body.is_end_stream(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::{BodyExt, Full};

    #[tokio::test]
    async fn complete_yields_single_chunk() {
        let body: GatewayBody<Full<Bytes>> = GatewayBody::complete("hello");
        let collected = body.collect().await.unwrap();
        assert_eq!(collected.to_bytes(), Bytes::from("hello"));
    }

    #[tokio::test]
    async fn empty_is_end_stream() {
        let body: GatewayBody<Full<Bytes>> = GatewayBody::empty();
        assert!(body.is_end_stream());
        let collected = body.collect().await.unwrap();
        assert!(collected.to_bytes().is_empty());
    }

    #[tokio::test]
    async fn passthrough_forwards_inner_body() {
        let inner = Full::new(Bytes::from("streamed"));
        let body = GatewayBody::Passthrough(inner);
        let collected = body.collect().await.unwrap();
        assert_eq!(collected.to_bytes(), Bytes::from("streamed"));
    }

    #[test]
    fn complete_size_hint_is_exact() {
        let body: GatewayBody<Full<Bytes>> = GatewayBody::complete("1234");
        assert_eq!(body.size_hint().exact(), Some(4));
    }
}
