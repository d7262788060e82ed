//! HTML payment email
//!
//! Composes the HTML part of the payment confirmation email from the text
//! part sub-clients. The body and header templates are selected by the
//! order's payment status, falling back to the status-agnostic common
//! templates:
//!
//! 1. the value configured under `client/html/email/payment/html/template-body`
//! 2. `email/payment/<status>/html-body-standard.html`
//! 3. `email/common/html-body-standard.html`
//!
//! Unlike the locale picker this component does not guard its own phases;
//! its parent (or the page renderer) applies the error conversion policy.

use serde_json::Value;

use vitrine_application::registry::{COMPONENTS, ComponentEntry};
use vitrine_application::{Component, Composite, Context};
use vitrine_domain::error::{Error, Result};
use vitrine_domain::value_objects::OrderItem;
use vitrine_domain::view::View;

/// Text part sub-clients of the payment email
pub mod parts;

pub use parts::EmailTextPartClient;

const CLIENT_TYPE: &str = "email/payment/html";
const SUBPARTS: &[&str] = &["salutation", "intro", "summary", "outro", "legal"];

/// View key the caller stores the serialized order snapshot under
pub const VIEW_ORDER: &str = "order";
/// View key holding the concatenated text part body markup
pub const VIEW_HTML_BODY: &str = "html_body";
/// View key holding the concatenated text part header markup
pub const VIEW_HTML_HEADER: &str = "html_header";

/// HTML payment email component
pub struct EmailPaymentHtmlClient {
    base: Composite,
}

impl EmailPaymentHtmlClient {
    /// Create the component over the given service context
    pub fn new(context: Context) -> Self {
        Self {
            base: Composite::new(context, CLIENT_TYPE, SUBPARTS),
        }
    }

    /// The order snapshot the caller serialized into the view
    fn order(&self, view: &View) -> Result<OrderItem> {
        let value = view
            .get(VIEW_ORDER)
            .ok_or_else(|| Error::view("No order item available in view"))?;
        serde_json::from_value(value.clone())
            .map_err(|err| Error::view(format!("Order item not readable: {err}")))
    }
}

impl Component for EmailPaymentHtmlClient {
    fn client_type(&self) -> &str {
        self.base.client_type()
    }

    fn body(&self, uid: &str, view: &mut View) -> Result<String> {
        let order = self.order(view)?;
        view.add_tag(format!("order-{}", order.id));

        let html = self.base.body_parts(uid, view)?;
        view.set(VIEW_HTML_BODY, Value::String(html));

        let status = order.payment_status.as_str();
        let defaults = [
            format!("email/payment/{status}/html-body-standard.html"),
            "email/common/html-body-standard.html".to_string(),
        ];
        self.base.render(view, "template-body", &defaults)
    }

    fn header(&self, uid: &str, view: &mut View) -> Result<Option<String>> {
        let order = self.order(view)?;

        let html = self.base.header_parts(uid, view)?;
        view.set(VIEW_HTML_HEADER, Value::String(html));

        let status = order.payment_status.as_str();
        let defaults = [
            format!("email/payment/{status}/html-header-standard.html"),
            "email/common/html-header-standard.html".to_string(),
        ];
        Ok(Some(self.base.render(view, "template-header", &defaults)?))
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
static EMAIL_PAYMENT_HTML: ComponentEntry = ComponentEntry {
    client_type: "email/payment/html",
    name: "Standard",
    description: "HTML payment confirmation email",
    factory: |context| Ok(Box::new(EmailPaymentHtmlClient::new(context.clone()))),
};
