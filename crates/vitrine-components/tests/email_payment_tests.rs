//! Payment email rendered through the real adapters
//!
//! Exercises the status-driven template fallback chain and the text part
//! composition.

mod common;

use std::collections::HashMap;

use common::{test_context, write_layouts};
use vitrine_application::{Component, Context, PageRenderer, factory};
use vitrine_components::email::payment::VIEW_ORDER;
use vitrine_domain::error::Error;
use vitrine_domain::value_objects::{OrderItem, PaymentStatus};
use vitrine_domain::view::View;

const COMMON_TEMPLATES: &[(&str, &str)] = &[
    (
        "email/common/html-body-standard.html",
        "<html><body>common {{ html_body | safe }}</body></html>",
    ),
    (
        "email/common/html-header-standard.html",
        "<title>Your order {{ order.id }}</title>",
    ),
    (
        "email/common/salutation-body-standard.html",
        "<p>Dear {% if order.customer %}{{ order.customer }}{% else %}customer{% endif %},</p>",
    ),
    ("email/common/intro-body-standard.html", "<p>intro</p>"),
    ("email/common/summary-body-standard.html", "<p>summary</p>"),
    ("email/common/outro-body-standard.html", "<p>outro</p>"),
    ("email/common/legal-body-standard.html", "<p>legal</p>"),
];

const PENDING_TEMPLATE: (&str, &str) = (
    "email/payment/pending/html-body-standard.html",
    "<html><body>pending {{ html_body | safe }}</body></html>",
);

fn order(status: PaymentStatus) -> OrderItem {
    OrderItem {
        id: "1042".to_string(),
        payment_status: status,
        customer: Some("Erin Example".to_string()),
    }
}

fn email_context(extra: &[(&str, &str)], client: serde_json::Value) -> Context {
    let dir = tempfile::tempdir().unwrap();
    write_layouts(dir.path(), COMMON_TEMPLATES);
    write_layouts(dir.path(), extra);
    test_context(dir.path(), client, Vec::new())
}

fn seeded_view(status: PaymentStatus) -> View {
    let mut view = View::new();
    view.set(VIEW_ORDER, serde_json::to_value(order(status)).unwrap());
    view
}

#[test]
fn a_pending_payment_uses_the_status_specific_template() {
    let ctx = email_context(&[PENDING_TEMPLATE], serde_json::json!({}));
    let email = factory::create_client(&ctx, "email/payment/html", None).unwrap();

    let mut view = seeded_view(PaymentStatus::Pending);
    let body = email.body("", &mut view).unwrap();

    assert!(body.starts_with("<html><body>pending "));
    assert!(body.contains("<p>Dear Erin Example,</p>"));
    assert!(view.tags().contains("order-1042"));
}

#[test]
fn without_a_status_template_the_common_template_is_used() {
    // No pending template on disk: the second candidate wins.
    let ctx = email_context(&[], serde_json::json!({}));
    let email = factory::create_client(&ctx, "email/payment/html", None).unwrap();

    let mut view = seeded_view(PaymentStatus::Pending);
    let body = email.body("", &mut view).unwrap();

    assert!(body.starts_with("<html><body>common "));
}

#[test]
fn a_configured_template_key_wins_over_the_fallback_chain() {
    let ctx = email_context(
        &[
            PENDING_TEMPLATE,
            ("email/custom/body.html", "custom {{ html_body | safe }}"),
        ],
        serde_json::json!({
            "html": {"email": {"payment": {"html": {"template-body": "email/custom/body.html"}}}}
        }),
    );
    let email = factory::create_client(&ctx, "email/payment/html", None).unwrap();

    let mut view = seeded_view(PaymentStatus::Pending);
    let body = email.body("", &mut view).unwrap();

    assert!(body.starts_with("custom "));
}

#[test]
fn text_parts_render_in_configured_order() {
    let ctx = email_context(
        &[],
        serde_json::json!({
            "html": {"email": {"payment": {"html": {"subparts": ["legal", "salutation"]}}}}
        }),
    );
    let email = factory::create_client(&ctx, "email/payment/html", None).unwrap();

    let mut view = seeded_view(PaymentStatus::Received);
    let body = email.body("", &mut view).unwrap();

    let legal = body.find("<p>legal</p>").unwrap();
    let salutation = body.find("<p>Dear Erin Example,</p>").unwrap();
    assert!(legal < salutation);
    assert!(!body.contains("<p>intro</p>"));
}

#[test]
fn the_header_renders_the_common_fallback() {
    let ctx = email_context(&[], serde_json::json!({}));
    let email = factory::create_client(&ctx, "email/payment/html", None).unwrap();

    let mut view = seeded_view(PaymentStatus::Pending);
    let header = email.header("", &mut view).unwrap();

    assert_eq!(header.as_deref(), Some("<title>Your order 1042</title>"));
}

#[test]
fn a_missing_order_is_a_view_error() {
    let ctx = email_context(&[], serde_json::json!({}));
    let email = factory::create_client(&ctx, "email/payment/html", None).unwrap();

    let mut view = View::new();
    assert!(matches!(email.body("", &mut view), Err(Error::View { .. })));
}

#[test]
fn the_page_renderer_converts_a_missing_order_into_a_message() {
    let ctx = email_context(&[], serde_json::json!({}));
    let renderer = PageRenderer::new(ctx);

    let page = renderer.render(&["email/payment/html"], HashMap::new()).unwrap();
    assert_eq!(page.body, "");
    assert!(page.errors.iter().any(|e| e == "No order item available in view"));
}
