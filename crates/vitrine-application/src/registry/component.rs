//! Component Registry
//!
//! Components register themselves via a `linkme` distributed slice and are
//! discovered at runtime by `(client_type, name)`. The factory in
//! [`crate::factory`] is the only intended caller of
//! [`resolve_component`]; it adds name validation and decorator wrapping on
//! top.

use vitrine_domain::error::{Error, Result};

use crate::context::Context;
use crate::ports::Component;

/// Registry entry for a page component implementation
///
/// Each implementation registers one entry per `(client_type, name)` pair it
/// provides. The factory function receives the shared service context and
/// returns the component behind the capability trait, so a resolved entry
/// can never lack a required capability.
pub struct ComponentEntry {
    /// Type path the implementation serves, e.g. `"locale/select"`
    pub client_type: &'static str,
    /// Implementation name selected through configuration, e.g. `"Standard"`
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function creating the component instance
    pub factory: fn(&Context) -> Result<Box<dyn Component>>,
}

// Components submit entries at compile time.
#[linkme::distributed_slice]
pub static COMPONENTS: [ComponentEntry] = [..];

/// Resolve a component implementation from the registry
///
/// Searches the registry for an entry matching the type path and
/// implementation name and invokes its factory.
pub fn resolve_component(
    context: &Context,
    client_type: &str,
    name: &str,
) -> Result<Box<dyn Component>> {
    for entry in COMPONENTS {
        if entry.client_type == client_type && entry.name == name {
            return (entry.factory)(context);
        }
    }

    Err(Error::UnknownComponent {
        client_type: client_type.to_string(),
        name: name.to_string(),
        available: COMPONENTS
            .iter()
            .map(|entry| format!("{}:{}", entry.client_type, entry.name))
            .collect(),
    })
}

/// List all registered components as `(client_type, name, description)`
///
/// Useful for CLI help and configuration validation.
pub fn list_components() -> Vec<(&'static str, &'static str, &'static str)> {
    COMPONENTS
        .iter()
        .map(|entry| (entry.client_type, entry.name, entry.description))
        .collect()
}
