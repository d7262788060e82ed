//! Template rendering port

use crate::error::Result;
use crate::view::View;

/// File-based template engine
///
/// Template paths are relative to the layouts root, e.g.
/// `locale/select/body-standard.html`. Fallback through candidate lists is
/// the caller's job (via [`exists`](TemplateEngine::exists)); the engine only
/// renders a path it is given.
pub trait TemplateEngine: Send + Sync {
    /// Render the template at `path` with the data of the given view
    fn render(&self, path: &str, view: &View) -> Result<String>;

    /// Whether a template exists under the given path
    fn exists(&self, path: &str) -> bool;
}
