//! Session persistence port

/// Visitor-scoped key/value store
///
/// Keys are fixed slash-delimited names such as `vitrine/locale/languageid`.
/// The store outlives single render passes and may be shared between request
/// threads, so implementations must be thread safe.
pub trait SessionStore: Send + Sync {
    /// Persist a value under the given key, replacing any previous value
    fn set(&self, key: &str, value: &str);

    /// Look up a previously stored value
    fn get(&self, key: &str) -> Option<String>;
}
