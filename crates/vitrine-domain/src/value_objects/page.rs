//! Rendered page snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value Object: Rendered Page
///
/// The assembled result of one render pass over a list of root components:
/// concatenated body and header markup plus the accumulators collected on
/// the view (visitor-facing errors, cache tags, earliest expiry).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Concatenated body markup of all root components
    pub body: String,
    /// Concatenated head-section markup of all root components
    pub header: String,
    /// Visitor-facing error messages collected during the pass
    pub errors: Vec<String>,
    /// Cache invalidation tags collected during the pass
    pub tags: Vec<String>,
    /// Earliest expiry of the rendered fragments, `None` when nothing expires
    pub expires: Option<DateTime<Utc>>,
}
