//! Route endpoints: directly invocable units or named controller references.

use std::fmt;
use std::str::FromStr;

use crate::error::{BoxError, RouterError};
use crate::response::ResponseWriter;

/// A directly invocable route endpoint.
///
/// Handlers receive the captured placeholder values positionally, in pattern
/// declaration order, and produce their output through the response writer.
/// The router interprets nothing but the error outcome.
pub trait RouteHandler: Send + Sync {
    fn invoke(&self, args: &[&str], res: &mut dyn ResponseWriter) -> Result<(), BoxError>;
}

/// A closure holder implementing [`RouteHandler`].
struct FnHandler<F>(F);

impl<F> RouteHandler for FnHandler<F>
where
    F: Fn(&[&str], &mut dyn ResponseWriter) -> Result<(), BoxError> + Send + Sync,
{
    fn invoke(&self, args: &[&str], res: &mut dyn ResponseWriter) -> Result<(), BoxError> {
        (self.0)(args, res)
    }
}

/// Wraps a closure as a route handler.
///
/// # Example
/// ```
/// use micro_router::{handler_fn, Router};
///
/// let router = Router::new().get("/user/{id}", handler_fn(|args, res| {
///     res.write_body(args[0]);
///     Ok(())
/// }));
/// # let _ = router;
/// ```
pub fn handler_fn<F>(f: F) -> Handler
where
    F: Fn(&[&str], &mut dyn ResponseWriter) -> Result<(), BoxError> + Send + Sync + 'static,
{
    Handler::Direct(Box::new(FnHandler(f)))
}

/// One registration's target: code to call directly, or a deferred two-part
/// reference resolved through the router's controller registry at dispatch
/// time.
pub enum Handler {
    /// An invocable unit, called with positional placeholder values.
    Direct(Box<dyn RouteHandler>),
    /// A `Controller@action` reference; both parts are non-empty.
    Named { controller: String, action: String },
}

impl Handler {
    /// Builds a named reference from its two parts.
    pub fn named(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Named { controller: controller.into(), action: action.into() }
    }
}

impl FromStr for Handler {
    type Err = RouterError;

    /// Parses the `"Controller@action"` reference form.
    ///
    /// Any other shape is a configuration error. The shape is validated here,
    /// so dispatch only ever sees well-formed references.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('@') {
            Some((controller, action)) if !controller.is_empty() && !action.is_empty() => {
                Ok(Self::named(controller, action))
            }
            _ => Err(RouterError::invalid_handler(format!("expected `Controller@action`, got `{s}`"))),
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("Direct(..)"),
            Self::Named { controller, action } => write!(f, "Named({controller}@{action})"),
        }
    }
}
