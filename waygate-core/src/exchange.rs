//! Per-request exchange context.

use http::Request;

use crate::route::Route;

/// State carried through the interceptor chain for one request.
///
/// The exchange owns the inbound request and the routing state resolved by the
/// gateway. Interceptors that redirect a request replace the route wholesale
/// with [`Exchange::set_route`]; the request itself stays immutable for the
/// duration of interception.
#[derive(Debug)]
pub struct Exchange<B> {
    request: Request<B>,
    route: Option<Route<B>>,
}

impl<B> Exchange<B> {
    /// Creates an exchange with no resolved route.
    pub fn new(request: Request<B>) -> Self {
        Exchange {
            request,
            route: None,
        }
    }

    /// Creates an exchange with an already-resolved route.
    pub fn with_route(request: Request<B>, route: Route<B>) -> Self {
        Exchange {
            request,
            route: Some(route),
        }
    }

    /// Returns the inbound request.
    pub fn request(&self) -> &Request<B> {
        &self.request
    }

    /// Returns the currently resolved route, if any.
    pub fn route(&self) -> Option<&Route<B>> {
        self.route.as_ref()
    }

    /// Replaces the resolved route.
    pub fn set_route(&mut self, route: Route<B>) {
        self.route = Some(route);
    }

    /// Splits the exchange into its request and routing state.
    pub fn into_parts(self) -> (Request<B>, Option<Route<B>>) {
        (self.request, self.route)
    }
}
