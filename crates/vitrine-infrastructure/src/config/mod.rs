//! Configuration
//!
//! Two views onto the same merged configuration: a typed [`AppConfig`] for
//! the infrastructure settings (logging, layouts, locale data) and the
//! slash-path [`TreeConfig`] store the rendering engine queries for its
//! free-form `client/html/...` keys. Client configuration lives under the
//! `[client]` TOML table, e.g.
//!
//! ```toml
//! [client.html.locale.select]
//! subparts = ["currency", "language"]
//!
//! [client.html.common.decorators]
//! default = ["Log"]
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::ConfigStore;
use vitrine_domain::value_objects::LocaleItem;

/// Configuration loading
pub mod loader;

pub use loader::ConfigLoader;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Layouts root the template engine loads from
    pub layouts: PathBuf,
    /// Directory holding translation catalogs (`<domain>.toml`), optional
    pub translations: Option<PathBuf>,
    /// Locale data served by the configured locale repository
    pub locale: LocaleConfig,
    /// Free-form client configuration tree (`client/html/...` paths)
    pub client: Value,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            layouts: PathBuf::from("layouts"),
            translations: None,
            locale: LocaleConfig::default(),
            client: Value::Object(serde_json::Map::new()),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    pub level: String,
    /// Emit JSON events instead of human-readable lines
    pub json_format: bool,
    /// Additional rolling log file, optional
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Locale data and defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Language selected when neither request nor session carry one
    pub language_id: String,
    /// Currency selected when neither request nor session carry one
    pub currency_id: String,
    /// Selectable locale items
    pub items: Vec<LocaleItem>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_id: "en".to_string(),
            currency_id: "EUR".to_string(),
            items: vec![LocaleItem::new("en", "EUR", 0)],
        }
    }
}

/// Slash-path lookup over the merged configuration tree
///
/// Implements the engine's [`ConfigStore`] port. Paths like
/// `client/html/locale/select/subparts` are split on `/` and walked through
/// the nested tables of the merged configuration.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    root: Value,
}

impl TreeConfig {
    /// Build the store over an arbitrary configuration tree
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Build the store over the serialized application configuration
    pub fn from_app_config(config: &AppConfig) -> Result<Self> {
        let root = serde_json::to_value(config).map_err(|err| Error::Config {
            message: "Configuration is not serializable".to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { root })
    }

    /// Walk a slash-delimited path through the tree
    fn node(&self, path: &str) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl ConfigStore for TreeConfig {
    fn get_string(&self, path: &str) -> Result<Option<String>> {
        match self.node(path) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(Error::config(format!(
                "Configuration path \"{path}\" holds {other}, expected a string"
            ))),
        }
    }

    fn get_list(&self, path: &str) -> Result<Option<Vec<String>>> {
        match self.node(path) {
            None => Ok(None),
            Some(Value::Array(items)) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(value) => values.push(value.clone()),
                        other => {
                            return Err(Error::config(format!(
                                "Configuration path \"{path}\" holds non-string entry {other}"
                            )));
                        }
                    }
                }
                Ok(Some(values))
            }
            Some(other) => Err(Error::config(format!(
                "Configuration path \"{path}\" holds {other}, expected a list"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> TreeConfig {
        TreeConfig::from_value(json!({
            "client": {
                "html": {
                    "locale": {
                        "select": {
                            "name": "Standard",
                            "subparts": ["currency", "language"],
                        }
                    }
                }
            }
        }))
    }

    #[test]
    fn slash_paths_resolve_nested_tables() {
        let config = store();
        assert_eq!(
            config.get_string("client/html/locale/select/name").unwrap(),
            Some("Standard".to_string())
        );
        assert_eq!(
            config.get_list("client/html/locale/select/subparts").unwrap(),
            Some(vec!["currency".to_string(), "language".to_string()])
        );
    }

    #[test]
    fn absent_paths_are_none() {
        let config = store();
        assert_eq!(config.get_string("client/html/missing/name").unwrap(), None);
        assert_eq!(config.get_list("client/html/missing/subparts").unwrap(), None);
    }

    #[test]
    fn wrong_shapes_are_configuration_errors() {
        let config = store();
        assert!(config.get_string("client/html/locale/select/subparts").is_err());
        assert!(config.get_list("client/html/locale/select/name").is_err());
    }

    #[test]
    fn app_config_tree_exposes_typed_sections() {
        let config = TreeConfig::from_app_config(&AppConfig::default()).unwrap();
        assert_eq!(config.get_string("locale/language_id").unwrap(), Some("en".to_string()));
    }
}
