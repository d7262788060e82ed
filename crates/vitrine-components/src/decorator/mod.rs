//! Component decorators
//!
//! Decorators wrap a component behind the same capability trait and are
//! layered by the factory according to configuration. Typical uses: tracing
//! what is currently rendered, short-circuiting phases under conditions, or
//! modifying what is returned to the parent.

/// Fragment cache decorator
pub mod cache;
/// Phase tracing decorator
pub mod log;

pub use cache::CacheDecorator;
pub use log::LogDecorator;
