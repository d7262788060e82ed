//! Locale components
//!
//! The locale picker tree: a section component composing a language and a
//! currency list, plus the `process` logic persisting the visitor's
//! selection into the session.

/// Locale picker section and its sub-parts
pub mod select;
