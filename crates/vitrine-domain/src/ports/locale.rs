//! Locale data access port

use crate::error::Result;
use crate::value_objects::LocaleItem;

/// Provides the locale items a visitor can select
///
/// This is the engine's only data-access seam; storefronts back it with
/// whatever storage they use. Failures surface as recoverable data-layer
/// errors during rendering.
pub trait LocaleRepository: Send + Sync {
    /// All selectable locale items, in storage order
    fn list(&self) -> Result<Vec<LocaleItem>>;
}
