//! Infrastructure Layer - Vitrine
//!
//! Adapters implementing the ports of `vitrine-domain` plus the startup
//! plumbing: figment-based configuration loading with slash-path lookup,
//! the tera template engine adapter, the in-memory session store, the TOML
//! catalog translator, the configured locale repository, tracing setup and
//! the context bootstrap wiring everything together.

// Force-link vitrine-components so its linkme registrations are included
// for everyone who depends on this crate.
extern crate vitrine_components;

pub mod bootstrap;
pub mod config;
pub mod i18n;
pub mod locales;
pub mod logging;
pub mod session;
pub mod templating;

pub use bootstrap::{bootstrap, build_context};
pub use config::{AppConfig, ConfigLoader, LocaleConfig, LoggingConfig, TreeConfig};
pub use i18n::CatalogTranslator;
pub use locales::ConfigLocaleRepository;
pub use logging::{init_logging, parse_log_level};
pub use session::MemorySessionStore;
pub use templating::TeraTemplateEngine;
