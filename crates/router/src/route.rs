//! A single registration: verb rule, path template, handler.

use http::Method;

use crate::handler::Handler;
use crate::params::PathParams;
use crate::pattern::Pattern;

/// Which verbs a route accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodRule {
    /// Matches every verb (the `any()` registration form).
    Any,
    /// Matches exactly one verb.
    Exact(Method),
}

impl MethodRule {
    fn allows(&self, method: &Method) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => expected == method,
        }
    }
}

/// One registered endpoint. Immutable once appended to the route table.
#[derive(Debug)]
pub(crate) struct Route {
    method: MethodRule,
    pattern: Pattern,
    handler: Handler,
}

impl Route {
    pub(crate) fn new(method: MethodRule, pattern: &str, handler: Handler) -> Self {
        Self { method, pattern: Pattern::new(pattern), handler }
    }

    /// The match predicate: verb rule first, then the template matched over
    /// the whole path.
    pub(crate) fn matches(&self, method: &Method, path: &str) -> bool {
        self.method.allows(method) && self.pattern.matches(path)
    }

    pub(crate) fn extract_params(&self, path: &str) -> PathParams {
        self.pattern.extract(path)
    }

    pub(crate) fn handler(&self) -> &Handler {
        &self.handler
    }

    pub(crate) fn template(&self) -> &str {
        self.pattern.template()
    }
}
