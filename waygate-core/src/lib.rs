#![warn(missing_docs)]
//! # waygate-core
//!
//! Core contract for Waygate gateway interceptors.
//!
//! An [`Interceptor`] is a unit of request/response processing inserted into a
//! chain owned by the surrounding gateway. It receives the per-request
//! [`Exchange`] and a [`Next`] continuation, and may either short-circuit with
//! its own response or forward to the rest of the chain.
//!
//! The chain's dispatch engine itself is not part of this crate: Waygate only
//! defines the capability that the gateway composes.

pub mod body;
pub mod error;
pub mod exchange;
pub mod interceptor;
pub mod route;

pub use body::GatewayBody;
pub use error::{BoxError, GatewayError};
pub use exchange::Exchange;
pub use interceptor::{Interceptor, InterceptorResult, Next};
pub use route::{AlwaysMatch, Route, RouteBuilder, RoutePredicate};
