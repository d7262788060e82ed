//! Currency list of the locale picker
//!
//! Counterpart of the language list; renders the currencies available for
//! the selected language from the seeded selection data.

use serde_json::Value;

use vitrine_application::registry::{COMPONENTS, ComponentEntry};
use vitrine_application::{Component, Composite, Context};
use vitrine_domain::error::Result;
use vitrine_domain::view::View;

const CLIENT_TYPE: &str = "locale/select/currency";
const SUBPARTS: &[&str] = &[];

/// View key holding the concatenated sub-part body markup
pub const VIEW_CURRENCY_BODY: &str = "select_currency_body";

/// Currency list component
pub struct CurrencyClient {
    base: Composite,
}

impl CurrencyClient {
    /// Create the component over the given service context
    pub fn new(context: Context) -> Self {
        Self {
            base: Composite::new(context, CLIENT_TYPE, SUBPARTS),
        }
    }
}

impl Component for CurrencyClient {
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
        view.set(VIEW_CURRENCY_BODY, Value::String(html));

        let defaults = ["locale/select/currency-body-standard.html".to_string()];
        self.base.render(view, "template-body", &defaults)
    }

    fn header(&self, uid: &str, view: &mut View) -> Result<Option<String>> {
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
static LOCALE_SELECT_CURRENCY: ComponentEntry = ComponentEntry {
    client_type: "locale/select/currency",
    name: "Standard",
    description: "Currency list of the locale picker",
    factory: |context| Ok(Box::new(CurrencyClient::new(context.clone()))),
};
