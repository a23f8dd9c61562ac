use std::error::Error;

use thiserror::Error;

/// Boxed error type returned by invoked handlers.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Errors raised while dispatching a request.
///
/// Failing to match any route is not an error; it takes the not-found path.
/// The router itself fails only on malformed or unresolvable handler
/// references; anything a handler raises is passed through untouched.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("invalid handler reference: {reason}")]
    InvalidHandler { reason: String },

    #[error("unknown controller: {name}")]
    UnknownController { name: String },

    #[error("controller `{controller}` has no action `{action}`")]
    UnknownAction { controller: String, action: String },

    #[error("handler error: {source}")]
    Handler {
        #[from]
        source: BoxError,
    },
}

impl RouterError {
    pub fn invalid_handler<S: ToString>(reason: S) -> Self {
        Self::InvalidHandler { reason: reason.to_string() }
    }

    pub fn unknown_controller<S: ToString>(name: S) -> Self {
        Self::UnknownController { name: name.to_string() }
    }

    pub fn unknown_action<S: ToString>(controller: S, action: S) -> Self {
        Self::UnknownAction { controller: controller.to_string(), action: action.to_string() }
    }

    pub fn handler(source: BoxError) -> Self {
        Self::Handler { source }
    }
}
