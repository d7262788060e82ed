//! Locale repository adapter
//!
//! Serves the locale items straight from configuration. Storefronts with a
//! database back the [`LocaleRepository`] port with their own adapter.

use vitrine_domain::error::Result;
use vitrine_domain::ports::LocaleRepository;
use vitrine_domain::value_objects::LocaleItem;

/// Locale repository fed from the `[locale]` configuration section
#[derive(Debug, Clone, Default)]
pub struct ConfigLocaleRepository {
    items: Vec<LocaleItem>,
}

impl ConfigLocaleRepository {
    /// Create the repository over the configured items
    pub fn new(items: Vec<LocaleItem>) -> Self {
        Self { items }
    }
}

impl LocaleRepository for ConfigLocaleRepository {
    fn list(&self) -> Result<Vec<LocaleItem>> {
        Ok(self.items.clone())
    }
}
