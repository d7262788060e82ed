//! Service Ports
//!
//! Narrow trait interfaces through which the rendering engine talks to the
//! outside world. The engine is synchronous and request-scoped, so all ports
//! are blocking; adapters live in `vitrine-infrastructure`.
//!
//! | Port | Responsibility |
//! |------|----------------|
//! | [`ConfigStore`] | Read-only slash-path configuration lookup |
//! | [`TemplateEngine`] | Render layout templates from view data |
//! | [`SessionStore`] | Visitor-scoped key/value persistence |
//! | [`Translator`] | Localize visitor-facing messages |
//! | [`LocaleRepository`] | Provide the selectable locale items |

/// Configuration lookup port
pub mod config;
/// Locale data access port
pub mod locale;
/// Session persistence port
pub mod session;
/// Template rendering port
pub mod template;
/// Message localization port
pub mod translate;

pub use config::ConfigStore;
pub use locale::LocaleRepository;
pub use session::SessionStore;
pub use template::TemplateEngine;
pub use translate::Translator;
