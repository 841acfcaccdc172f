//! Shared test fixtures: a minimal interceptor chain, a chunked test body,
//! and misbehaving stores.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};

use async_trait::async_trait;
use bytes::Bytes;
use futures::future::BoxFuture;
use http::{Response, StatusCode};
use http_body::{Body, Frame};
use waygate_core::{Exchange, GatewayBody, Interceptor, InterceptorResult, Next};
use waygate_store::{InMemoryStore, KeyValueStore, StoreError, StoreResult};

/// Terminal stage of a test chain, standing in for the gateway's upstream
/// dispatch.
pub type Terminal<B> = Arc<dyn Fn(Exchange<B>) -> BoxFuture<'static, InterceptorResult<B>> + Send + Sync>;

/// Minimal chain dispatcher: runs interceptors in ascending `order()` and
/// finishes with the terminal stage.
pub struct Chain<B> {
    interceptors: Vec<Arc<dyn Interceptor<B>>>,
    terminal: Terminal<B>,
}

impl<B> Chain<B>
where
    B: Send + 'static,
{
    pub fn new(terminal: Terminal<B>) -> Self {
        Chain {
            interceptors: Vec::new(),
            terminal,
        }
    }

    pub fn with(mut self, interceptor: Arc<dyn Interceptor<B>>) -> Self {
        self.interceptors.push(interceptor);
        self.interceptors.sort_by_key(|i| i.order());
        self
    }

    pub async fn run(&self, exchange: Exchange<B>) -> InterceptorResult<B> {
        dispatch(
            self.interceptors.clone().into(),
            Arc::clone(&self.terminal),
            exchange,
        )
        .await
    }
}

fn dispatch<B>(
    mut stack: VecDeque<Arc<dyn Interceptor<B>>>,
    terminal: Terminal<B>,
    exchange: Exchange<B>,
) -> BoxFuture<'static, InterceptorResult<B>>
where
    B: Send + 'static,
{
    Box::pin(async move {
        match stack.pop_front() {
            Some(interceptor) => {
                let next = Next::new(move |exchange| dispatch(stack, terminal, exchange));
                interceptor.intercept(exchange, next).await
            }
            None => terminal(exchange).await,
        }
    })
}

/// Upstream that counts invocations and answers with a fixed status and body.
pub fn counting_upstream(
    status: StatusCode,
    body: &'static str,
    calls: Arc<AtomicUsize>,
) -> Terminal<ChunkBody> {
    Arc::new(move |_exchange| {
        let calls = Arc::clone(&calls);
        Box::pin(async move {
            calls.fetch_add(1, Ordering::SeqCst);
            let mut response = Response::new(GatewayBody::complete(body));
            *response.status_mut() = status;
            Ok(response)
        })
    })
}

/// Finite, non-restartable sequence of body chunks.
#[derive(Debug, Default)]
pub struct ChunkBody {
    chunks: VecDeque<Bytes>,
}

impl ChunkBody {
    pub fn new(chunks: &[&'static str]) -> Self {
        ChunkBody {
            chunks: chunks.iter().copied().map(Bytes::from).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl Body for ChunkBody {
    type Data = Bytes;
    type Error = Infallible;

    fn poll_frame(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        Poll::Ready(self.get_mut().chunks.pop_front().map(|chunk| Ok(Frame::data(chunk))))
    }

    fn is_end_stream(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Body that yields its chunks, then fails mid-stream (a dropped upstream
/// connection or client disconnect during buffering).
#[derive(Debug, Default)]
pub struct FailingBody {
    chunks: VecDeque<Bytes>,
}

impl FailingBody {
    pub fn new(chunks: &[&'static str]) -> Self {
        FailingBody {
            chunks: chunks.iter().copied().map(Bytes::from).collect(),
        }
    }
}

impl Body for FailingBody {
    type Data = Bytes;
    type Error = std::io::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        match self.get_mut().chunks.pop_front() {
            Some(chunk) => Poll::Ready(Some(Ok(Frame::data(chunk)))),
            None => Poll::Ready(Some(Err(std::io::Error::other("connection reset mid-body")))),
        }
    }
}

/// Store whose every operation fails (for fail-open testing).
#[derive(Clone, Default)]
pub struct FailingStore;

fn simulated_error() -> StoreError {
    StoreError::Internal(Box::new(std::io::Error::other("simulated store failure")))
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn exists(&self, _key: &str) -> StoreResult<bool> {
        Err(simulated_error())
    }

    async fn get(&self, _key: &str) -> StoreResult<Option<Bytes>> {
        Err(simulated_error())
    }

    async fn set(&self, _key: &str, _value: Bytes) -> StoreResult<()> {
        Err(simulated_error())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Store that reads fine but rejects every write (for write-back testing).
#[derive(Clone, Default)]
pub struct ReadOnlyStore {
    pub inner: InMemoryStore,
}

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn exists(&self, key: &str) -> StoreResult<bool> {
        self.inner.exists(key).await
    }

    async fn get(&self, key: &str) -> StoreResult<Option<Bytes>> {
        self.inner.get(key).await
    }

    async fn set(&self, _key: &str, _value: Bytes) -> StoreResult<()> {
        Err(simulated_error())
    }

    fn name(&self) -> &str {
        "read-only"
    }
}
