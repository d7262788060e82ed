//! Text parts of the payment email
//!
//! The payment email body is assembled from five text parts rendered in
//! configured order: salutation, intro, summary, outro and legal. The parts
//! share one implementation; each registry entry pins the slot it serves.
//! Template fallback per part:
//!
//! 1. the value configured under `client/html/email/payment/html/<part>/template-body`
//! 2. `email/payment/html/<part>-body-standard.html`
//! 3. `email/common/<part>-body-standard.html`

use serde_json::Value;

use vitrine_application::registry::{COMPONENTS, ComponentEntry};
use vitrine_application::{Component, Composite, Context};
use vitrine_domain::error::Result;
use vitrine_domain::view::View;

/// One text part of the payment email
///
/// The part renders its template from the view data the email component and
/// the caller seeded (notably the `order` snapshot); it contributes no
/// head-section markup of its own.
pub struct EmailTextPartClient {
    base: Composite,
    part: &'static str,
}

impl EmailTextPartClient {
    /// Create the component serving the given part slot
    pub fn new(context: Context, part: &'static str) -> Self {
        Self {
            base: Composite::new(context, format!("email/payment/html/{part}"), &[]),
            part,
        }
    }
}

impl Component for EmailTextPartClient {
    fn client_type(&self) -> &str {
        self.base.client_type()
    }

    fn body(&self, uid: &str, view: &mut View) -> Result<String> {
        let html = self.base.body_parts(uid, view)?;
        view.set(format!("html_{}_body", self.part), Value::String(html));

        let defaults = [
            format!("email/payment/html/{}-body-standard.html", self.part),
            format!("email/common/{}-body-standard.html", self.part),
        ];
        self.base.render(view, "template-body", &defaults)
    }

    fn header(&self, uid: &str, view: &mut View) -> Result<Option<String>> {
        Ok(Some(self.base.header_parts(uid, view)?))
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
static EMAIL_SALUTATION: ComponentEntry = ComponentEntry {
    client_type: "email/payment/html/salutation",
    name: "Standard",
    description: "Salutation text part of the payment email",
    factory: |context| Ok(Box::new(EmailTextPartClient::new(context.clone(), "salutation"))),
};

#[linkme::distributed_slice(COMPONENTS)]
static EMAIL_INTRO: ComponentEntry = ComponentEntry {
    client_type: "email/payment/html/intro",
    name: "Standard",
    description: "Intro text part of the payment email",
    factory: |context| Ok(Box::new(EmailTextPartClient::new(context.clone(), "intro"))),
};

#[linkme::distributed_slice(COMPONENTS)]
static EMAIL_SUMMARY: ComponentEntry = ComponentEntry {
    client_type: "email/payment/html/summary",
    name: "Standard",
    description: "Order summary text part of the payment email",
    factory: |context| Ok(Box::new(EmailTextPartClient::new(context.clone(), "summary"))),
};

#[linkme::distributed_slice(COMPONENTS)]
static EMAIL_OUTRO: ComponentEntry = ComponentEntry {
    client_type: "email/payment/html/outro",
    name: "Standard",
    description: "Outro text part of the payment email",
    factory: |context| Ok(Box::new(EmailTextPartClient::new(context.clone(), "outro"))),
};

#[linkme::distributed_slice(COMPONENTS)]
static EMAIL_LEGAL: ComponentEntry = ComponentEntry {
    client_type: "email/payment/html/legal",
    name: "Standard",
    description: "Legal text part of the payment email",
    factory: |context| Ok(Box::new(EmailTextPartClient::new(context.clone(), "legal"))),
};
