//! Configuration lookup port

use crate::error::Result;

/// Read-only configuration store queried through slash-delimited paths
///
/// Paths look like `client/html/locale/select/subparts`. Values are either
/// strings or lists of strings; a value of the wrong shape is a
/// configuration error, an absent value is `None`. The engine never writes
/// configuration.
pub trait ConfigStore: Send + Sync {
    /// Look up a string value
    ///
    /// Returns `Err` when the path exists but does not hold a string.
    fn get_string(&self, path: &str) -> Result<Option<String>>;

    /// Look up a list of strings
    ///
    /// Returns `Err` when the path exists but does not hold a list of
    /// strings.
    fn get_list(&self, path: &str) -> Result<Option<Vec<String>>>;
}
