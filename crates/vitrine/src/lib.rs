//! # Vitrine
//!
//! A composable storefront page rendering engine. Pages are assembled from
//! a hierarchical tree of named components; each component composes its
//! configured sub-parts in order, renders its own template and isolates the
//! failures of its children. Implementations are resolved by name from
//! configuration through a compile-time registry and wrapped with a
//! configurable decorator chain.
//!
//! ## Example
//!
//! ```ignore
//! use vitrine::application::PageRenderer;
//! use vitrine::infrastructure::bootstrap;
//!
//! let (_config, context) = bootstrap(None)?;
//! let page = PageRenderer::new(context).render(&["locale/select"], params)?;
//! println!("{}", page.body);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - rendering context, errors, value objects, service ports
//! - `application` - component trait, registries, factory, tree renderer
//! - `components` - concrete components and decorators
//! - `infrastructure` - configuration, templating, session, i18n, logging

/// Domain layer - rendering context, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use vitrine_domain::*;
}

/// Application layer - component trait, registries, factory and renderer
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use vitrine_application::*;
}

/// Component implementations and decorators
///
/// Re-exports from the components crate for convenience
pub mod components {
    pub use vitrine_components::*;
}

/// Infrastructure layer - configuration, templating, session, i18n, logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use vitrine_infrastructure::*;
}
