//! Component capability trait

use std::fmt;

use vitrine_domain::error::Result;
use vitrine_domain::view::View;

/// Capability interface of every page component
///
/// A component is one node of the page composition tree. Its identity is a
/// slash-delimited type path (`locale/select/language`); its children are
/// resolved through the factory from the configured sub-part list and driven
/// in order through the same three phases the component itself exposes.
///
/// ## Render lifecycle
///
/// 1. [`process`](Component::process) - side effects only (e.g. persisting a
///    locale selection into the session), no output, run before rendering;
/// 2. [`header`](Component::header) - head-section markup;
/// 3. [`body`](Component::body) - body markup.
///
/// `uid` disambiguates multiple placements of the same component on one page
/// and must be forwarded unchanged to children. The `view` is the shared
/// rendering context of the pass; components mutate it before handing it to
/// their children.
///
/// ## Error contract
///
/// `body` and `process` convert child failures into visitor-facing messages
/// on the view and keep rendering the remaining siblings; only failures of
/// the component's own final template render propagate to the parent, which
/// applies the same conversion. `header` is asymmetric by design: any
/// failure of the phase is logged and yields `Ok(None)` without a
/// visitor-facing message.
pub trait Component: Send + Sync {
    /// Type path identifying this component, e.g. `"locale/select"`
    fn client_type(&self) -> &str;

    /// Render the component's body markup
    fn body(&self, uid: &str, view: &mut View) -> Result<String>;

    /// Render the component's head-section markup
    ///
    /// `Ok(None)` means the phase failed and was suppressed (already
    /// logged); an empty string means the component has nothing to add.
    fn header(&self, uid: &str, view: &mut View) -> Result<Option<String>>;

    /// Run the side-effect phase, e.g. persist request parameters
    ///
    /// Must not produce output.
    fn process(&self, view: &mut View) -> Result<()>;

    /// Create a child component outside the ordered sub-part list
    ///
    /// `client_type` is relative to this component's type path; `name`
    /// overrides the configured implementation name. Resolution goes through
    /// the same factory path as ordered children, decorators included.
    fn sub_client(&self, client_type: &str, name: Option<&str>) -> Result<Box<dyn Component>>;
}

impl fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("client_type", &self.client_type())
            .finish_non_exhaustive()
    }
}
