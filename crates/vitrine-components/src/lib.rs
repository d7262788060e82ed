//! Component Implementations
//!
//! Concrete page components and decorators. Every implementation registers
//! itself into the registries declared by `vitrine-application`, so linking
//! this crate is all it takes to make them resolvable by name.
//!
//! ## Components
//!
//! | Type path | Description |
//! |-----------|-------------|
//! | `locale/select` | Locale picker section |
//! | `locale/select/language` | Language list of the picker |
//! | `locale/select/currency` | Currency list of the picker |
//! | `email/payment/html` | HTML payment confirmation email |
//! | `email/payment/html/<part>` | Email text parts (salutation, intro, summary, outro, legal) |
//!
//! ## Decorators
//!
//! | Name | Description |
//! |------|-------------|
//! | `Log` | Traces phase entry/exit and timing |
//! | `Cache` | Caches rendered fragments, replaying tags and expiry |

pub mod decorator;
pub mod email;
pub mod locale;

pub use decorator::{CacheDecorator, LogDecorator};
pub use email::payment::EmailPaymentHtmlClient;
pub use locale::select::LocaleSelectClient;
