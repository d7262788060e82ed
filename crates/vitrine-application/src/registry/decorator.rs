//! Decorator Registry
//!
//! Decorators wrap a component behind the same capability trait and are
//! registered the same way components are. The chain a component ends up
//! with is assembled by the factory from three configured lists (common
//! defaults minus excludes, global minus excludes, local).

use vitrine_domain::error::{Error, Result};

use crate::context::Context;
use crate::ports::Component;

/// Registry entry for a component decorator
pub struct DecoratorEntry {
    /// Decorator name selected through configuration, e.g. `"Log"`
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory wrapping an existing component into the decorator
    pub factory: fn(Box<dyn Component>, &Context) -> Box<dyn Component>,
}

// Decorators submit entries at compile time.
#[linkme::distributed_slice]
pub static DECORATORS: [DecoratorEntry] = [..];

/// Wrap `component` with the decorator registered under `name`
pub fn resolve_decorator(
    context: &Context,
    name: &str,
    component: Box<dyn Component>,
) -> Result<Box<dyn Component>> {
    for entry in DECORATORS {
        if entry.name == name {
            return Ok((entry.factory)(component, context));
        }
    }

    Err(Error::UnknownDecorator {
        name: name.to_string(),
        available: DECORATORS.iter().map(|entry| entry.name.to_string()).collect(),
    })
}

/// List all registered decorators as `(name, description)`
pub fn list_decorators() -> Vec<(&'static str, &'static str)> {
    DECORATORS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
