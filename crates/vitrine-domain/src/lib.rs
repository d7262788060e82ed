//! Domain Layer - Vitrine
//!
//! Core types of the Vitrine page composition engine: the error taxonomy,
//! the rendering context ([`View`]) that travels down the component tree,
//! value objects shared between layers, and the narrow port traits through
//! which the engine talks to the outside world (configuration, templates,
//! session, translation, locale data).
//!
//! ## Architecture
//!
//! This crate sits at the bottom of the workspace and depends only on pure
//! libraries. Everything else depends on it:
//!
//! - `vitrine-application` - component trait, registries, factory, renderer
//! - `vitrine-components` - concrete components and decorators
//! - `vitrine-infrastructure` - adapters implementing the ports defined here

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;
pub mod view;

pub use error::{Error, Result};
pub use view::View;
