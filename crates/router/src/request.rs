//! The per-request view the router matches against.
//!
//! The context is an explicit value built by the hosting transport and handed
//! into [`Router::run`](crate::Router::run); the router never reads ambient
//! request state, so it can be exercised without a transport behind it.

use http::Method;

/// The verb and normalized path of one incoming request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: Method,
    path: String,
}

impl RequestContext {
    /// Builds a context from a verb and a raw request target.
    ///
    /// The query string and fragment are dropped and boundary `/` trimmed, so
    /// `"/user/42/?page=2"` and `"user/42"` produce the same path. The site
    /// root (`"/"` or `""`) normalizes to the empty string.
    pub fn new(method: Method, raw_path: &str) -> Self {
        Self { method, path: normalize_path(raw_path) }
    }

    /// Returns the HTTP method of the request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the normalized path: no boundary separators, no query string,
    /// no fragment.
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn normalize_path(raw: &str) -> String {
    let path = raw.split(['?', '#']).next().unwrap_or(raw);
    path.trim_matches('/').to_string()
}
