//! Message localization port

/// Localizes visitor-facing messages
///
/// Lookup is by catalog domain (`client`, `frontend`, `data`) and message
/// text. Implementations fall back to the message itself when no catalog
/// entry exists, so untranslated installations degrade gracefully.
pub trait Translator: Send + Sync {
    /// Translate `message` within the given catalog domain
    fn translate(&self, domain: &str, message: &str) -> String;
}
