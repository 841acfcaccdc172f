//! Resolved upstream routes.
//!
//! A [`Route`] is the gateway's answer to "where does this request go": an
//! identifier, a target URI, a chain position, the predicate that matched the
//! request, and the per-route filter list. Routes are immutable; interceptors
//! that need to redirect a request (such as the host rewrite) build a
//! replacement route and store it back into the [`Exchange`](crate::Exchange).

use std::fmt;
use std::sync::Arc;

use http::Uri;
use http::request::Parts;
use smol_str::SmolStr;

use crate::interceptor::Interceptor;

/// Predicate that decided whether a route matches a request.
///
/// Matching itself happens in the surrounding gateway before interceptors run;
/// the predicate is carried on the route so that a rebuilt route keeps the
/// same matching behavior.
pub trait RoutePredicate: Send + Sync {
    /// Returns `true` when the request head matches this route.
    fn matches(&self, request: &Parts) -> bool;
}

/// Predicate that matches every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysMatch;

impl RoutePredicate for AlwaysMatch {
    fn matches(&self, _request: &Parts) -> bool {
        true
    }
}

/// A resolved upstream target attached to an in-flight exchange.
pub struct Route<B> {
    id: SmolStr,
    uri: Uri,
    order: i32,
    predicate: Arc<dyn RoutePredicate>,
    filters: Arc<[Arc<dyn Interceptor<B>>]>,
}

impl<B> Route<B> {
    /// Starts building a route with the two required components.
    pub fn builder(id: impl Into<SmolStr>, uri: Uri) -> RouteBuilder<B> {
        RouteBuilder {
            id: id.into(),
            uri,
            order: 0,
            predicate: Arc::new(AlwaysMatch),
            filters: Vec::new(),
        }
    }

    /// Returns the route identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the upstream target URI.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the route's position relative to other routes.
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Returns the predicate that matched this route.
    pub fn predicate(&self) -> &Arc<dyn RoutePredicate> {
        &self.predicate
    }

    /// Returns the per-route filter list.
    pub fn filters(&self) -> &Arc<[Arc<dyn Interceptor<B>>]> {
        &self.filters
    }

    /// Rebuilds this route with a different target URI.
    ///
    /// Identity, order, predicate, and filters are preserved; only the target
    /// changes. This is the primitive the host rewrite uses.
    pub fn with_uri(&self, uri: Uri) -> Route<B> {
        Route {
            id: self.id.clone(),
            uri,
            order: self.order,
            predicate: Arc::clone(&self.predicate),
            filters: Arc::clone(&self.filters),
        }
    }
}

impl<B> Clone for Route<B> {
    fn clone(&self) -> Self {
        Route {
            id: self.id.clone(),
            uri: self.uri.clone(),
            order: self.order,
            predicate: Arc::clone(&self.predicate),
            filters: Arc::clone(&self.filters),
        }
    }
}

impl<B> fmt::Debug for Route<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("id", &self.id)
            .field("uri", &self.uri)
            .field("order", &self.order)
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// Builder for [`Route`].
pub struct RouteBuilder<B> {
    id: SmolStr,
    uri: Uri,
    order: i32,
    predicate: Arc<dyn RoutePredicate>,
    filters: Vec<Arc<dyn Interceptor<B>>>,
}

impl<B> RouteBuilder<B> {
    /// Sets the route's position relative to other routes.
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Sets the predicate that matched this route.
    pub fn predicate(mut self, predicate: Arc<dyn RoutePredicate>) -> Self {
        self.predicate = predicate;
        self
    }

    /// Sets the per-route filter list.
    pub fn filters(mut self, filters: Vec<Arc<dyn Interceptor<B>>>) -> Self {
        self.filters = filters;
        self
    }

    /// Finalizes the route.
    pub fn build(self) -> Route<B> {
        Route {
            id: self.id,
            uri: self.uri,
            order: self.order,
            predicate: self.predicate,
            filters: self.filters.into(),
        }
    }
}
