//! Component and Decorator Registries
//!
//! Auto-registration infrastructure for page components and decorators.
//! Implementations register themselves at compile time through `linkme`
//! distributed slices and are resolved at runtime by name, so this crate
//! never learns about concrete types.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     Registration Flow                          │
//! ├────────────────────────────────────────────────────────────────┤
//! │                                                                │
//! │  1. Component defines:  #[linkme::distributed_slice(COMPONENTS)]│
//! │                         static ENTRY: ComponentEntry = ...     │
//! │                               ↓                                │
//! │  2. Registry declares:  #[linkme::distributed_slice]           │
//! │                         pub static COMPONENTS: [Entry] = [..]  │
//! │                               ↓                                │
//! │  3. Factory resolves:   config "client/html/<type>/name"       │
//! │                         → lookup (type, name) → instance       │
//! │                               ↓                                │
//! │  4. Decorator chain:    config ".../decorators/*" → wrap       │
//! │                                                                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ### Registering a component (in `vitrine-components`)
//!
//! ```ignore
//! use vitrine_application::registry::{ComponentEntry, COMPONENTS};
//!
//! #[linkme::distributed_slice(COMPONENTS)]
//! static LOCALE_SELECT: ComponentEntry = ComponentEntry {
//!     client_type: "locale/select",
//!     name: "Standard",
//!     description: "Locale picker section",
//!     factory: |context| Ok(Box::new(LocaleSelectClient::new(context.clone()))),
//! };
//! ```

/// Component registry
pub mod component;
/// Decorator registry
pub mod decorator;

pub use component::{COMPONENTS, ComponentEntry, list_components, resolve_component};
pub use decorator::{DECORATORS, DecoratorEntry, list_decorators, resolve_decorator};
