//! Named-handler resolution.
//!
//! A route may point at `Controller@action` instead of a closure. Targets are
//! resolved through an explicit registry populated at startup, not through
//! open-ended reflection, so every name a route table can mention is
//! auditable in one place.

use std::collections::HashMap;
use std::fmt;

use crate::error::BoxError;
use crate::response::ResponseWriter;

/// A unit of routable behavior addressed by name.
///
/// `invoke` dispatches `action` with the positional placeholder values.
/// Returning `None` means the controller has no such action; the router turns
/// that into a resolution error naming both parts of the reference.
pub trait Controller: Send + Sync {
    fn invoke(&self, action: &str, args: &[&str], res: &mut dyn ResponseWriter) -> Option<Result<(), BoxError>>;
}

type ControllerFactory = Box<dyn Fn() -> Box<dyn Controller> + Send + Sync>;

/// Maps controller names to no-argument constructors.
///
/// Populated before the first dispatch and read-only afterwards. A fresh
/// controller instance is constructed per dispatch, so controllers carry no
/// state between requests.
#[derive(Default)]
pub struct ControllerRegistry {
    factories: HashMap<String, ControllerFactory>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `C` under `name`, chainable. A later registration under the
    /// same name replaces the earlier one.
    #[must_use]
    pub fn register<C>(mut self, name: impl Into<String>) -> Self
    where
        C: Controller + Default + 'static,
    {
        self.factories.insert(name.into(), Box::new(|| Box::new(C::default())));
        self
    }

    /// Instantiates the controller registered under `name`, if any.
    pub(crate) fn resolve(&self, name: &str) -> Option<Box<dyn Controller>> {
        self.factories.get(name).map(|factory| factory())
    }
}

impl fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerRegistry").field("controllers", &self.factories.keys().collect::<Vec<_>>()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct PageController;

    impl Controller for PageController {
        fn invoke(&self, action: &str, _args: &[&str], res: &mut dyn ResponseWriter) -> Option<Result<(), BoxError>> {
            match action {
                "home" => {
                    res.write_body("home");
                    Some(Ok(()))
                }
                _ => None,
            }
        }
    }

    #[test]
    fn test_resolve_registered_controller() {
        let registry = ControllerRegistry::new().register::<PageController>("PageController");
        assert!(registry.resolve("PageController").is_some());
    }

    #[test]
    fn test_resolve_unknown_controller() {
        let registry = ControllerRegistry::new();
        assert!(registry.resolve("PageController").is_none());
    }

    #[test]
    fn test_later_registration_wins() {
        #[derive(Default)]
        struct Replacement;

        impl Controller for Replacement {
            fn invoke(
                &self,
                action: &str,
                _args: &[&str],
                res: &mut dyn ResponseWriter,
            ) -> Option<Result<(), BoxError>> {
                match action {
                    "home" => {
                        res.write_body("replaced");
                        Some(Ok(()))
                    }
                    _ => None,
                }
            }
        }

        let registry = ControllerRegistry::new()
            .register::<PageController>("PageController")
            .register::<Replacement>("PageController");

        let controller = registry.resolve("PageController").unwrap();
        let mut res = crate::response::MockResponseWriter::new();
        res.expect_write_body().withf(|chunk| chunk == "replaced").once().return_const(());
        controller.invoke("home", &[], &mut res).unwrap().unwrap();
    }
}
