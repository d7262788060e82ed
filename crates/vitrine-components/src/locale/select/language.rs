//! Language list of the locale picker
//!
//! Renders the selectable languages from the selection data the parent
//! section seeds into the view. The component has no sub-parts of its own
//! by default, but honors a configured `subparts` list like every node.

use serde_json::Value;

use vitrine_application::registry::{COMPONENTS, ComponentEntry};
use vitrine_application::{Component, Composite, Context};
use vitrine_domain::error::Result;
use vitrine_domain::view::View;

const CLIENT_TYPE: &str = "locale/select/language";
const SUBPARTS: &[&str] = &[];

/// View key holding the concatenated sub-part body markup
pub const VIEW_LANGUAGE_BODY: &str = "select_language_body";

/// Language list component
pub struct LanguageClient {
    base: Composite,
}

impl LanguageClient {
    /// Create the component over the given service context
    pub fn new(context: Context) -> Self {
        Self {
            base: Composite::new(context, CLIENT_TYPE, SUBPARTS),
        }
    }
}

impl Component for LanguageClient {
    fn client_type(&self) -> &str {
        self.base.client_type()
    }

    fn body(&self, uid: &str, view: &mut View) -> Result<String> {
        let html = match self.base.body_parts(uid, view) {
            Ok(html) => html,
            Err(err) => {
                self.base.report(err, view);
                String::new()
            }
        };
        view.set(VIEW_LANGUAGE_BODY, Value::String(html));

        let defaults = ["locale/select/language-body-standard.html".to_string()];
        self.base.render(view, "template-body", &defaults)
    }

    fn header(&self, uid: &str, view: &mut View) -> Result<Option<String>> {
        // No head-section contribution beyond the sub-parts.
        Ok(self.base.swallow_header(self.base.header_parts(uid, view)))
    }

    fn process(&self, view: &mut View) -> Result<()> {
        self.base.process_parts(view)
    }

    fn sub_client(&self, client_type: &str, name: Option<&str>) -> Result<Box<dyn Component>> {
        self.base.create_sub_client(client_type, name)
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(COMPONENTS)]
static LOCALE_SELECT_LANGUAGE: ComponentEntry = ComponentEntry {
    client_type: "locale/select/language",
    name: "Standard",
    description: "Language list of the locale picker",
    factory: |context| Ok(Box::new(LanguageClient::new(context.clone()))),
};
