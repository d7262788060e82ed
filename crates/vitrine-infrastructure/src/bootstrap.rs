//! Context bootstrap
//!
//! Wires the configured adapters into the [`Context`] the rendering engine
//! runs on: slash-path configuration, tera templates, the in-memory session
//! store, the catalog translator and the configured locale repository.

use std::path::Path;
use std::sync::Arc;

use vitrine_application::Context;
use vitrine_domain::error::Result;
use vitrine_domain::ports::Translator;

use crate::config::{AppConfig, ConfigLoader, TreeConfig};
use crate::i18n::CatalogTranslator;
use crate::locales::ConfigLocaleRepository;
use crate::session::MemorySessionStore;
use crate::templating::TeraTemplateEngine;

/// Load configuration and assemble the service context
///
/// `config_path` overrides the default configuration file discovery.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppConfig, Context)> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }

    let config = loader.load()?;
    let context = build_context(&config)?;
    Ok((config, context))
}

/// Assemble the service context from a loaded configuration
pub fn build_context(config: &AppConfig) -> Result<Context> {
    let translator: Arc<dyn Translator> = match &config.translations {
        Some(dir) => Arc::new(CatalogTranslator::from_dir(dir)?),
        None => Arc::new(CatalogTranslator::empty()),
    };

    Context::builder()
        .with_config(Arc::new(TreeConfig::from_app_config(config)?))
        .with_templates(Arc::new(TeraTemplateEngine::new(&config.layouts)?))
        .with_session(Arc::new(MemorySessionStore::new()))
        .with_translator(translator)
        .with_locales(Arc::new(ConfigLocaleRepository::new(
            config.locale.items.clone(),
        )))
        .build()
}
