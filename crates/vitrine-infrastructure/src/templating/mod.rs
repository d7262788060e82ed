//! Template engine adapter
//!
//! Implements the [`TemplateEngine`] port with tera. Templates are loaded
//! from the layouts root (`**/*.html`); template paths used by components
//! are the paths relative to that root, e.g.
//! `locale/select/body-standard.html`.
//!
//! The rendering context exposes the view's data map at the top level plus
//! two fixed keys: `params` (request parameters) and `errors` (the
//! visitor-facing error list). HTML fragments stored by components must be
//! emitted with the `safe` filter since auto-escaping is on for `.html`.

use std::path::Path;

use tera::Tera;

use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::TemplateEngine;
use vitrine_domain::view::View;

/// Tera-backed template engine over a layouts directory
pub struct TeraTemplateEngine {
    tera: Tera,
}

impl TeraTemplateEngine {
    /// Load all templates below the given layouts root
    pub fn new(layouts: &Path) -> Result<Self> {
        let glob = format!("{}/**/*.html", layouts.display());
        let tera = Tera::new(&glob).map_err(|err| Error::Template {
            message: format!("Failed to load templates from \"{}\"", layouts.display()),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { tera })
    }

    /// Names of all loaded templates
    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.tera.get_template_names()
    }
}

impl TemplateEngine for TeraTemplateEngine {
    fn render(&self, path: &str, view: &View) -> Result<String> {
        let mut context = tera::Context::new();
        for (key, value) in view.data() {
            context.insert(key.as_str(), value);
        }
        context.insert("params", view.params());
        context.insert("errors", view.errors());

        self.tera.render(path, &context).map_err(|err| Error::Template {
            message: format!("Failed to render template \"{path}\""),
            source: Some(Box::new(err)),
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.tera.get_template_names().any(|name| name == path)
    }
}
