//! Translation adapter
//!
//! TOML-catalog implementation of the [`Translator`] port. Each catalog
//! domain is one `<domain>.toml` file of `"message" = "translation"` pairs
//! in the configured translations directory. Unknown messages fall back to
//! the message text itself, so untranslated installations keep working.

use std::collections::HashMap;
use std::path::Path;

use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::Translator;

/// Catalog-based translator
#[derive(Debug, Default, Clone)]
pub struct CatalogTranslator {
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl CatalogTranslator {
    /// Create a translator without catalogs (identity translation)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every `<domain>.toml` catalog below the given directory
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut catalogs = HashMap::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }
            let Some(domain) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let raw = std::fs::read_to_string(&path)?;
            let entries: HashMap<String, String> =
                toml::from_str(&raw).map_err(|err| Error::Config {
                    message: format!("Invalid translation catalog \"{}\"", path.display()),
                    source: Some(Box::new(err)),
                })?;
            catalogs.insert(domain.to_string(), entries);
        }

        Ok(Self { catalogs })
    }

    /// Add a catalog programmatically (used by tests and embedders)
    pub fn with_catalog(
        mut self,
        domain: impl Into<String>,
        entries: HashMap<String, String>,
    ) -> Self {
        self.catalogs.insert(domain.into(), entries);
        self
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, domain: &str, message: &str) -> String {
        self.catalogs
            .get(domain)
            .and_then(|catalog| catalog.get(message))
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }
}
