//! Locale picker section
//!
//! Renders the locale selection of the storefront. The section loads the
//! selectable locale items once per instance, groups them by language and
//! currency for the templates, and composes the `language` and `currency`
//! sub-parts in configured order. `process` persists a selection submitted
//! through the `loc-languageid` / `loc-currencyid` request parameters into
//! the session.

use once_cell::sync::OnceCell;
use serde_json::{Map, Value};

use vitrine_application::registry::{COMPONENTS, ComponentEntry};
use vitrine_application::{Component, Composite, Context};
use vitrine_domain::constants::{
    PARAM_CURRENCY_ID, PARAM_LANGUAGE_ID, SESSION_CURRENCY_ID, SESSION_LANGUAGE_ID,
};
use vitrine_domain::error::{Error, Result};
use vitrine_domain::view::View;

/// Currency list sub-part
pub mod currency;
/// Language list sub-part
pub mod language;

pub use currency::CurrencyClient;
pub use language::LanguageClient;

const CLIENT_TYPE: &str = "locale/select";
const SUBPARTS: &[&str] = &["language", "currency"];

/// View key holding the concatenated sub-part body markup
pub const VIEW_SELECT_BODY: &str = "select_body";
/// View key holding the concatenated sub-part header markup
pub const VIEW_SELECT_HEADER: &str = "select_header";
/// View key holding the language → currency → item map
pub const VIEW_SELECT_ITEMS: &str = "select_items";
/// View key holding the selected language id
pub const VIEW_SELECT_LANGUAGE_ID: &str = "select_language_id";
/// View key holding the selected currency id
pub const VIEW_SELECT_CURRENCY_ID: &str = "select_currency_id";

/// Cache tag marking output that depends on locale data
pub const TAG_LOCALE: &str = "locale";

/// Selection state computed once per instance
struct Selection {
    items: Map<String, Value>,
    language_id: String,
    currency_id: String,
}

/// Locale picker section component
pub struct LocaleSelectClient {
    base: Composite,
    selection: OnceCell<Selection>,
}

impl LocaleSelectClient {
    /// Create the component over the given service context
    pub fn new(context: Context) -> Self {
        Self {
            base: Composite::new(context, CLIENT_TYPE, SUBPARTS),
            selection: OnceCell::new(),
        }
    }

    /// Load and group the locale items, memoized per instance
    fn selection(&self, view: &View) -> Result<&Selection> {
        self.selection.get_or_try_init(|| {
            let context = self.base.context();

            let mut items = context.locales().list().map_err(|err| match err {
                recoverable @ Error::Data { .. } => recoverable,
                other => Error::data(format!("Locale items not available: {other}")),
            })?;
            items.sort_by(|a, b| b.position.cmp(&a.position));

            // language -> currency -> item, insertion order = position order
            let mut map = Map::new();
            for item in &items {
                let value = serde_json::to_value(item).map_err(|err| {
                    Error::internal(format!("Locale item not serializable: {err}"))
                })?;
                let currencies = map
                    .entry(item.language_id.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(currencies) = currencies {
                    currencies.insert(item.currency_id.clone(), value);
                }
            }

            let language_id = selected(view, context, PARAM_LANGUAGE_ID, SESSION_LANGUAGE_ID, "locale/language_id", "en")?;
            let currency_id = selected(view, context, PARAM_CURRENCY_ID, SESSION_CURRENCY_ID, "locale/currency_id", "EUR")?;

            Ok(Selection {
                items: map,
                language_id,
                currency_id,
            })
        })
    }

    /// Seed the view with the selection data all sub-parts render from
    fn seed(&self, view: &mut View) -> Result<()> {
        let selection = self.selection(view)?;
        let items = Value::Object(selection.items.clone());
        let language_id = Value::String(selection.language_id.clone());
        let currency_id = Value::String(selection.currency_id.clone());

        view.set(VIEW_SELECT_ITEMS, items);
        view.set(VIEW_SELECT_LANGUAGE_ID, language_id);
        view.set(VIEW_SELECT_CURRENCY_ID, currency_id);
        view.add_tag(TAG_LOCALE);
        Ok(())
    }
}

impl Component for LocaleSelectClient {
    fn client_type(&self) -> &str {
        self.base.client_type()
    }

    fn body(&self, uid: &str, view: &mut View) -> Result<String> {
        if let Err(err) = self.seed(view) {
            self.base.report(err, view);
        }

        let html = match self.base.body_parts(uid, view) {
            Ok(html) => html,
            Err(err) => {
                self.base.report(err, view);
                String::new()
            }
        };
        view.set(VIEW_SELECT_BODY, Value::String(html));

        let defaults = ["locale/select/body-standard.html".to_string()];
        self.base.render(view, "template-body", &defaults)
    }

    fn header(&self, uid: &str, view: &mut View) -> Result<Option<String>> {
        let result = (|| {
            self.seed(view)?;
            let html = self.base.header_parts(uid, view)?;
            view.set(VIEW_SELECT_HEADER, Value::String(html));

            let defaults = ["locale/select/header-standard.html".to_string()];
            self.base.render(view, "template-header", &defaults)
        })();

        Ok(self.base.swallow_header(result))
    }

    fn process(&self, view: &mut View) -> Result<()> {
        let session = self.base.context().session();

        if let Some(language_id) = view.param(PARAM_LANGUAGE_ID) {
            session.set(SESSION_LANGUAGE_ID, language_id);
        }
        if let Some(currency_id) = view.param(PARAM_CURRENCY_ID) {
            session.set(SESSION_CURRENCY_ID, currency_id);
        }

        self.base.process_parts(view)
    }

    fn sub_client(&self, client_type: &str, name: Option<&str>) -> Result<Box<dyn Component>> {
        self.base.create_sub_client(client_type, name)
    }
}

/// Resolve the selected id: request parameter, then session, then config
fn selected(
    view: &View,
    context: &Context,
    param: &str,
    session_key: &str,
    config_path: &str,
    fallback: &str,
) -> Result<String> {
    if let Some(id) = view.param(param) {
        return Ok(id.to_string());
    }
    if let Some(id) = context.session().get(session_key) {
        return Ok(id);
    }
    Ok(context
        .config()
        .get_string(config_path)?
        .unwrap_or_else(|| fallback.to_string()))
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(COMPONENTS)]
static LOCALE_SELECT: ComponentEntry = ComponentEntry {
    client_type: "locale/select",
    name: "Standard",
    description: "Locale picker section",
    factory: |context| Ok(Box::new(LocaleSelectClient::new(context.clone()))),
};
