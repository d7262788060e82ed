//! Order value objects
//!
//! The payment email components render a snapshot of an order. The engine
//! never talks to an order storage itself; callers serialize an [`OrderItem`]
//! into the view before rendering.

use serde::{Deserialize, Serialize};

/// Payment state of an order
///
/// The lowercase string form (`as_str`) is used as a path segment when
/// resolving status-specific email templates, e.g.
/// `email/payment/pending/html-body-standard.html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Payment was not started
    Unfinished,
    /// Order was deleted before payment
    Deleted,
    /// Payment was canceled by the customer
    Canceled,
    /// Payment was refused by the payment provider
    Refused,
    /// Payment was refunded
    Refund,
    /// Payment is pending confirmation
    Pending,
    /// Payment was authorized but not captured
    Authorized,
    /// Payment was received
    Received,
}

impl PaymentStatus {
    /// Lowercase identifier used in template paths and serialization
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unfinished => "unfinished",
            Self::Deleted => "deleted",
            Self::Canceled => "canceled",
            Self::Refused => "refused",
            Self::Refund => "refund",
            Self::Pending => "pending",
            Self::Authorized => "authorized",
            Self::Received => "received",
        }
    }
}

/// Value Object: Order Snapshot
///
/// The subset of an order the payment email components need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Order identifier, also used as a cache tag (`order-<id>`)
    pub id: String,
    /// Current payment state
    pub payment_status: PaymentStatus,
    /// Customer name for the salutation, when known
    #[serde(default)]
    pub customer: Option<String>,
}
