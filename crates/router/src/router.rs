//! Route registration and first-match dispatch.

use std::fmt;

use http::{Method, StatusCode};
use tracing::debug;

use crate::controller::ControllerRegistry;
use crate::error::RouterError;
use crate::handler::Handler;
use crate::request::RequestContext;
use crate::response::ResponseWriter;
use crate::route::{MethodRule, Route};

/// Body written when no route matches and no not-found handler is set.
const DEFAULT_NOT_FOUND_BODY: &str = "404 - page not found";

/// An ordered route table with first-registered-match-wins dispatch.
///
/// Routes are evaluated strictly in registration order and the first one
/// whose predicate passes is dispatched. This is a priority system, not a
/// best-match system: an early general pattern shadows a later, more specific
/// one.
///
/// Registration finishes before the first dispatch. Afterwards the table is
/// read-only, so a shared router can serve concurrent requests without any
/// synchronization and repeated dispatch of the same request always selects
/// the same route.
pub struct Router {
    routes: Vec<Route>,
    controllers: ControllerRegistry,
    not_found: Option<Handler>,
}

impl Router {
    /// Creates an empty router with no registered controllers.
    pub fn new() -> Self {
        Self::with_controllers(ControllerRegistry::new())
    }

    /// Creates an empty router that resolves named handlers through
    /// `controllers`.
    pub fn with_controllers(controllers: ControllerRegistry) -> Self {
        Self { routes: Vec::new(), controllers, not_found: None }
    }

    /// Registers a route under an explicit verb rule, chainable.
    ///
    /// The pattern's boundary `/` are stripped before storage. Duplicate and
    /// overlapping patterns are allowed; priority is registration order.
    #[must_use]
    pub fn route(mut self, method: MethodRule, pattern: &str, handler: impl Into<Handler>) -> Self {
        self.routes.push(Route::new(method, pattern, handler.into()));
        self
    }

    /// Registers a route for GET requests.
    #[must_use]
    pub fn get(self, pattern: &str, handler: impl Into<Handler>) -> Self {
        self.route(MethodRule::Exact(Method::GET), pattern, handler)
    }

    /// Registers a route for POST requests.
    #[must_use]
    pub fn post(self, pattern: &str, handler: impl Into<Handler>) -> Self {
        self.route(MethodRule::Exact(Method::POST), pattern, handler)
    }

    /// Registers a route for PUT requests.
    #[must_use]
    pub fn put(self, pattern: &str, handler: impl Into<Handler>) -> Self {
        self.route(MethodRule::Exact(Method::PUT), pattern, handler)
    }

    /// Registers a route for DELETE requests.
    #[must_use]
    pub fn delete(self, pattern: &str, handler: impl Into<Handler>) -> Self {
        self.route(MethodRule::Exact(Method::DELETE), pattern, handler)
    }

    /// Registers a route matching every verb.
    #[must_use]
    pub fn any(self, pattern: &str, handler: impl Into<Handler>) -> Self {
        self.route(MethodRule::Any, pattern, handler)
    }

    /// Replaces the not-found handler; the last call wins.
    #[must_use]
    pub fn set_not_found_handler(mut self, handler: impl Into<Handler>) -> Self {
        self.not_found = Some(handler.into());
        self
    }

    /// Dispatches one request.
    ///
    /// Walks the route table in registration order, invokes the first
    /// matching route's handler with the captured placeholder values, or
    /// takes the not-found path when nothing matches. Errors raised by the
    /// invoked handler propagate unchanged; the router itself fails only
    /// while resolving a named handler.
    pub fn run(&self, ctx: &RequestContext, res: &mut dyn ResponseWriter) -> Result<(), RouterError> {
        for route in &self.routes {
            if route.matches(ctx.method(), ctx.path()) {
                debug!(pattern = route.template(), path = ctx.path(), "route matched");
                let params = route.extract_params(ctx.path());
                let values = params.values();
                return self.call(route.handler(), &values, res);
            }
        }
        self.handle_not_found(ctx, res)
    }

    /// Invokes a handler with positional arguments. Matched routes and the
    /// not-found handler both go through here, so either may be a named
    /// controller reference.
    fn call(&self, handler: &Handler, args: &[&str], res: &mut dyn ResponseWriter) -> Result<(), RouterError> {
        match handler {
            Handler::Direct(handler) => handler.invoke(args, res).map_err(RouterError::handler),
            Handler::Named { controller, action } => {
                let instance =
                    self.controllers.resolve(controller).ok_or_else(|| RouterError::unknown_controller(controller))?;
                match instance.invoke(action, args, res) {
                    Some(outcome) => outcome.map_err(RouterError::handler),
                    None => Err(RouterError::unknown_action(controller, action)),
                }
            }
        }
    }

    /// Signals 404 to the transport first, then runs the custom not-found
    /// handler if one is set, else writes the default body.
    fn handle_not_found(&self, ctx: &RequestContext, res: &mut dyn ResponseWriter) -> Result<(), RouterError> {
        debug!(method = %ctx.method(), path = ctx.path(), "no route matched");
        res.set_status(StatusCode::NOT_FOUND);
        match &self.not_found {
            Some(handler) => self.call(handler, &[], res),
            None => {
                res.write_body(DEFAULT_NOT_FOUND_BODY);
                Ok(())
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("controllers", &self.controllers)
            .field("has_not_found_handler", &self.not_found.is_some())
            .finish()
    }
}
