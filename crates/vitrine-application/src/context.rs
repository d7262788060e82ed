//! Shared service context
//!
//! A [`Context`] bundles the service ports every component needs: the
//! configuration store, the session store, the translator, the template
//! engine and the locale repository. It is assembled once at startup (see
//! `vitrine-infrastructure`), cloned cheaply (all fields are `Arc`s) and
//! handed to every component factory.

use std::sync::Arc;

use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::{ConfigStore, LocaleRepository, SessionStore, TemplateEngine, Translator};

/// Bundle of the service ports shared by all components
#[derive(Clone)]
pub struct Context {
    config: Arc<dyn ConfigStore>,
    session: Arc<dyn SessionStore>,
    translator: Arc<dyn Translator>,
    templates: Arc<dyn TemplateEngine>,
    locales: Arc<dyn LocaleRepository>,
}

impl Context {
    /// Start building a context
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    /// Configuration store
    pub fn config(&self) -> &dyn ConfigStore {
        self.config.as_ref()
    }

    /// Session store
    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Message translator
    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Template engine
    pub fn templates(&self) -> &dyn TemplateEngine {
        self.templates.as_ref()
    }

    /// Locale repository
    pub fn locales(&self) -> &dyn LocaleRepository {
        self.locales.as_ref()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}

/// Builder assembling a [`Context`] from service implementations
#[derive(Default)]
pub struct ContextBuilder {
    config: Option<Arc<dyn ConfigStore>>,
    session: Option<Arc<dyn SessionStore>>,
    translator: Option<Arc<dyn Translator>>,
    templates: Option<Arc<dyn TemplateEngine>>,
    locales: Option<Arc<dyn LocaleRepository>>,
}

impl ContextBuilder {
    /// Set the configuration store
    pub fn with_config(mut self, config: Arc<dyn ConfigStore>) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the session store
    pub fn with_session(mut self, session: Arc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the translator
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Set the template engine
    pub fn with_templates(mut self, templates: Arc<dyn TemplateEngine>) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Set the locale repository
    pub fn with_locales(mut self, locales: Arc<dyn LocaleRepository>) -> Self {
        self.locales = Some(locales);
        self
    }

    /// Build the context, failing when a service is missing
    pub fn build(self) -> Result<Context> {
        Ok(Context {
            config: self.config.ok_or_else(|| missing("configuration store"))?,
            session: self.session.ok_or_else(|| missing("session store"))?,
            translator: self.translator.ok_or_else(|| missing("translator"))?,
            templates: self.templates.ok_or_else(|| missing("template engine"))?,
            locales: self.locales.ok_or_else(|| missing("locale repository"))?,
        })
    }
}

fn missing(what: &str) -> Error {
    Error::config(format!("Context is missing a {what}"))
}
