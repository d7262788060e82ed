//! Locale value objects

use serde::{Deserialize, Serialize};

/// Value Object: Selectable Locale
///
/// One language/currency combination a visitor can switch the storefront to.
/// Items are ordered by descending `position` before they are grouped for
/// rendering, so shops control the order of the locale picker entirely
/// through data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleItem {
    /// ISO language identifier, e.g. `"en"` or `"de"`
    pub language_id: String,
    /// ISO currency identifier, e.g. `"EUR"` or `"USD"`
    pub currency_id: String,
    /// Sort position; higher positions are listed first
    #[serde(default)]
    pub position: i32,
}

impl LocaleItem {
    /// Create a locale item
    pub fn new(language_id: impl Into<String>, currency_id: impl Into<String>, position: i32) -> Self {
        Self {
            language_id: language_id.into(),
            currency_id: currency_id.into(),
            position,
        }
    }
}
