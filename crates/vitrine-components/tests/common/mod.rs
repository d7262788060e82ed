//! Shared fixtures: on-disk layouts and a context over the real adapters

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::Value;

use vitrine_application::Context;
use vitrine_domain::value_objects::LocaleItem;
use vitrine_infrastructure::config::{AppConfig, LocaleConfig};
use vitrine_infrastructure::build_context;

/// Write template files below a layouts root
pub fn write_layouts(dir: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full = dir.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
}

/// Assemble a context over real adapters for the given fixtures
pub fn test_context(layouts: &Path, client: Value, items: Vec<LocaleItem>) -> Context {
    let config = AppConfig {
        layouts: layouts.to_path_buf(),
        client,
        locale: LocaleConfig {
            items,
            ..LocaleConfig::default()
        },
        ..AppConfig::default()
    };
    build_context(&config).unwrap()
}
