//! The transport-facing response boundary.

use http::StatusCode;

/// Output channel a dispatched handler writes through.
///
/// Implemented by the hosting transport. The router itself only signals a
/// status code on the not-found path; everything else written through this
/// trait comes from handlers.
#[cfg_attr(test, mockall::automock)]
pub trait ResponseWriter {
    /// Signals the response status to the transport.
    fn set_status(&mut self, status: StatusCode);

    /// Appends a chunk of body text.
    fn write_body(&mut self, chunk: &str);
}
