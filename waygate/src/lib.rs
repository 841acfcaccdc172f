#![warn(missing_docs)]
//! # waygate
//!
//! A pair of request/response interceptors for a reverse-proxy gateway:
//!
//! - [`CachingInterceptor`] — a read-through response cache. Looks up the
//!   request's derived key in a [`KeyValueStore`]; on a hit it answers
//!   directly from the store, on a miss it forwards to the rest of the chain,
//!   buffers the complete upstream body, and writes it back when the upstream
//!   answered 2xx.
//! - [`HostRewriteInterceptor`] — overrides the resolved route's target host
//!   from the request's `host` header for this single request.
//!
//! Both implement the [`Interceptor`](waygate_core::Interceptor) capability
//! from `waygate-core` and compose in the same externally-owned chain.
//!
//! [`KeyValueStore`]: waygate_store::KeyValueStore

pub mod cache;
pub mod capture;
pub mod config;
pub mod key;
pub mod rewrite;

pub use cache::CachingInterceptor;
pub use capture::ResponseCapture;
pub use config::CacheConfig;
pub use key::CacheKey;
pub use rewrite::HostRewriteInterceptor;
