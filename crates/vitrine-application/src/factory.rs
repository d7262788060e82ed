//! Decorator-Chain Component Factory
//!
//! Resolves a component implementation from configuration and wraps it with
//! the configured decorator chain:
//!
//! 1. The implementation name comes from the caller, else from
//!    `client/html/<type>/name`, else defaults to `"Standard"`.
//! 2. The name must be ASCII alphanumeric; anything else is rejected before
//!    the registry is consulted.
//! 3. The `(type, name)` pair is resolved through the component registry.
//! 4. The decorator chain is assembled from three configured lists:
//!    the common defaults (`client/html/common/decorators/default`) and the
//!    per-type `global` list, both filtered by the per-type `excludes` list,
//!    followed by the per-type `local` list, which is never filtered.
//!    Decorators wrap in list order, so the last-listed decorator is the
//!    outermost layer.
//!
//! Factory errors are fatal to construction and propagate to the caller;
//! recovery only happens at render time.

use vitrine_domain::constants::{CONFIG_CLIENT_PREFIX, CONFIG_COMMON_DECORATORS, DEFAULT_CLIENT_NAME};
use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::ConfigStore;

use crate::context::Context;
use crate::ports::Component;
use crate::registry;

/// Create the configured, decorated component for a type path
///
/// `name` overrides the configured implementation name when given.
pub fn create_client(
    context: &Context,
    client_type: &str,
    name: Option<&str>,
) -> Result<Box<dyn Component>> {
    let name = match name {
        Some(name) => name.to_string(),
        None => context
            .config()
            .get_string(&format!("{CONFIG_CLIENT_PREFIX}/{client_type}/name"))?
            .unwrap_or_else(|| DEFAULT_CLIENT_NAME.to_string()),
    };

    validate_name(client_type, &name)?;

    let component = registry::resolve_component(context, client_type, &name)?;
    decorate(context, client_type, component)
}

/// Reject names containing anything but ASCII alphanumerics
fn validate_name(client_type: &str, name: &str) -> Result<()> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidName {
            name: format!("{client_type}/{name}"),
        });
    }
    Ok(())
}

/// Wrap a component with its configured decorator chain
fn decorate(
    context: &Context,
    client_type: &str,
    component: Box<dyn Component>,
) -> Result<Box<dyn Component>> {
    let config = context.config();
    let prefix = format!("{CONFIG_CLIENT_PREFIX}/{client_type}/decorators");

    let excludes = list_or_empty(config, &format!("{prefix}/excludes"))?;

    // Excludes filter the common defaults and the global list; local
    // decorators are always applied.
    let mut names: Vec<String> = Vec::new();
    for name in list_or_empty(config, CONFIG_COMMON_DECORATORS)? {
        if !excludes.contains(&name) {
            names.push(name);
        }
    }
    for name in list_or_empty(config, &format!("{prefix}/global"))? {
        if !excludes.contains(&name) {
            names.push(name);
        }
    }
    names.extend(list_or_empty(config, &format!("{prefix}/local"))?);

    let mut component = component;
    for name in &names {
        validate_name(client_type, name)?;
        component = registry::resolve_decorator(context, name, component)?;
    }

    Ok(component)
}

fn list_or_empty(config: &dyn ConfigStore, path: &str) -> Result<Vec<String>> {
    Ok(config.get_list(path)?.unwrap_or_default())
}
