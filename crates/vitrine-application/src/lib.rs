//! Application Layer - Vitrine
//!
//! This crate contains the two mechanisms at the core of the engine:
//!
//! - the **component tree renderer**: the [`Component`] capability trait,
//!   the [`Composite`] helper driving ordered sub-part rendering with
//!   per-child error isolation, and the [`PageRenderer`] use case running
//!   the process/header/body phases over a page's root components;
//! - the **decorator-chain factory**: linkme-backed registries of component
//!   and decorator constructors plus [`factory::create_client`], which
//!   resolves implementation names from configuration, validates them and
//!   assembles the configured decorator chain.
//!
//! ## Architecture
//!
//! The application layer depends only on `vitrine-domain`. Concrete
//! components live in `vitrine-components` and register themselves into the
//! registry slices declared here; `vitrine-infrastructure` pulls that crate
//! in to complete the registration (the registries stay free of concrete
//! knowledge).

pub mod composite;
pub mod context;
pub mod factory;
pub mod ports;
pub mod registry;
pub mod use_cases;

pub use composite::Composite;
pub use context::{Context, ContextBuilder};
pub use ports::Component;
pub use use_cases::PageRenderer;
