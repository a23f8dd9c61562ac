//! A tiny HTTP request router: an ordered route table, `{name}` path
//! placeholders, and first-registered-match-wins dispatch.
//!
//! Handlers are either closures wrapped with [`handler_fn`] or
//! `"Controller@action"` references resolved through a [`ControllerRegistry`]
//! populated at startup. The router reads no ambient request state: the
//! hosting transport builds a [`RequestContext`] and provides the
//! [`ResponseWriter`] the handlers write through.
//!
//! ```
//! use http::{Method, StatusCode};
//! use micro_router::{handler_fn, RequestContext, ResponseWriter, Router};
//!
//! struct Body(String);
//!
//! impl ResponseWriter for Body {
//!     fn set_status(&mut self, _status: StatusCode) {}
//!     fn write_body(&mut self, chunk: &str) {
//!         self.0.push_str(chunk);
//!     }
//! }
//!
//! let router = Router::new()
//!     .get("/", handler_fn(|_, res| {
//!         res.write_body("home");
//!         Ok(())
//!     }))
//!     .get("/user/{id}", handler_fn(|args, res| {
//!         res.write_body(args[0]);
//!         Ok(())
//!     }));
//!
//! let mut res = Body(String::new());
//! let ctx = RequestContext::new(Method::GET, "/user/42?tab=posts");
//! router.run(&ctx, &mut res).unwrap();
//! assert_eq!(res.0, "42");
//! ```

mod error;
mod handler;
mod params;
mod pattern;
mod request;
mod response;
mod route;
mod router;

pub mod controller;

pub use controller::{Controller, ControllerRegistry};
pub use error::{BoxError, RouterError};
pub use handler::{handler_fn, Handler, RouteHandler};
pub use params::PathParams;
pub use request::RequestContext;
pub use response::ResponseWriter;
pub use route::MethodRule;
pub use router::Router;
