//! Shared test doubles and fixture components
//!
//! The doubles implement the service ports without infrastructure; the
//! fixture components register themselves into the real registries, so the
//! factory and the composite helpers are exercised exactly like production
//! components exercise them.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use serde_json::Value;

use vitrine_application::registry::{
    COMPONENTS, ComponentEntry, DECORATORS, DecoratorEntry,
};
use vitrine_application::{Component, Composite, Context};
use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::{ConfigStore, LocaleRepository, SessionStore, TemplateEngine, Translator};
use vitrine_domain::value_objects::LocaleItem;
use vitrine_domain::view::View;

// ============================================================================
// Port doubles
// ============================================================================

/// Config double over two flat maps
#[derive(Default)]
pub struct MapConfig {
    strings: HashMap<String, String>,
    lists: HashMap<String, Vec<String>>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_string(mut self, path: &str, value: &str) -> Self {
        self.strings.insert(path.to_string(), value.to_string());
        self
    }

    pub fn set_list(mut self, path: &str, values: &[&str]) -> Self {
        self.lists
            .insert(path.to_string(), values.iter().map(|v| (*v).to_string()).collect());
        self
    }
}

impl ConfigStore for MapConfig {
    fn get_string(&self, path: &str) -> Result<Option<String>> {
        if self.lists.contains_key(path) {
            return Err(Error::config(format!(
                "Configuration path \"{path}\" holds a list, expected a string"
            )));
        }
        Ok(self.strings.get(path).cloned())
    }

    fn get_list(&self, path: &str) -> Result<Option<Vec<String>>> {
        if self.strings.contains_key(path) {
            return Err(Error::config(format!(
                "Configuration path \"{path}\" holds a string, expected a list"
            )));
        }
        Ok(self.lists.get(path).cloned())
    }
}

/// Template double mapping template paths to view keys
///
/// `render` emits the string stored under the mapped view key, so a
/// component's "template output" is exactly what it stored on the view.
#[derive(Default)]
pub struct StubTemplates {
    keys: HashMap<String, String>,
}

impl StubTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(mut self, path: &str, view_key: &str) -> Self {
        self.keys.insert(path.to_string(), view_key.to_string());
        self
    }
}

impl TemplateEngine for StubTemplates {
    fn render(&self, path: &str, view: &View) -> Result<String> {
        let key = self
            .keys
            .get(path)
            .ok_or_else(|| Error::Template {
                message: format!("Failed to render template \"{path}\""),
                source: None,
            })?;
        Ok(view
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    fn exists(&self, path: &str) -> bool {
        self.keys.contains_key(path)
    }
}

/// Translator double marking the catalog domain: `<domain>:<message>`
pub struct PrefixTranslator;

impl Translator for PrefixTranslator {
    fn translate(&self, domain: &str, message: &str) -> String {
        format!("{domain}:{message}")
    }
}

/// Session double over a mutexed map
#[derive(Default)]
pub struct MemSession {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemSession {
    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

/// Locale repository double without items
pub struct NoLocales;

impl LocaleRepository for NoLocales {
    fn list(&self) -> Result<Vec<LocaleItem>> {
        Ok(Vec::new())
    }
}

/// Assemble a context over the given config and template doubles
pub fn context(config: MapConfig, templates: StubTemplates) -> Context {
    Context::builder()
        .with_config(Arc::new(config))
        .with_templates(Arc::new(templates))
        .with_session(Arc::new(MemSession::default()))
        .with_translator(Arc::new(PrefixTranslator))
        .with_locales(Arc::new(NoLocales))
        .build()
        .unwrap()
}

/// Template double covering the fixture section's body and header
pub fn section_templates() -> StubTemplates {
    StubTemplates::new()
        .map("test/page/body-standard.html", "page_body")
        .map("test/page/header-standard.html", "page_header")
}

// ============================================================================
// Fixture components
// ============================================================================

/// Leaf emitting a fixed fragment
pub struct StaticPart {
    client_type: &'static str,
    output: &'static str,
}

impl Component for StaticPart {
    fn client_type(&self) -> &str {
        self.client_type
    }

    fn body(&self, _uid: &str, _view: &mut View) -> Result<String> {
        Ok(self.output.to_string())
    }

    fn header(&self, _uid: &str, _view: &mut View) -> Result<Option<String>> {
        Ok(Some(format!("h{}", self.output)))
    }

    fn process(&self, _view: &mut View) -> Result<()> {
        Ok(())
    }

    fn sub_client(&self, _client_type: &str, _name: Option<&str>) -> Result<Box<dyn Component>> {
        Err(Error::internal("static parts have no sub clients"))
    }
}

/// Leaf failing its body with a data-layer error
pub struct DataFailPart;

impl Component for DataFailPart {
    fn client_type(&self) -> &str {
        "test/page/baddata"
    }

    fn body(&self, _uid: &str, _view: &mut View) -> Result<String> {
        Err(Error::data("Locale items are gone"))
    }

    fn header(&self, _uid: &str, _view: &mut View) -> Result<Option<String>> {
        Ok(Some(String::new()))
    }

    fn process(&self, _view: &mut View) -> Result<()> {
        Err(Error::data("Locale items are gone"))
    }

    fn sub_client(&self, _client_type: &str, _name: Option<&str>) -> Result<Box<dyn Component>> {
        Err(Error::internal("no sub clients"))
    }
}

/// Leaf failing its body with an unexpected error
pub struct CrashPart;

impl Component for CrashPart {
    fn client_type(&self) -> &str {
        "test/page/crash"
    }

    fn body(&self, _uid: &str, _view: &mut View) -> Result<String> {
        Err(Error::internal("renderer state corrupted"))
    }

    fn header(&self, _uid: &str, _view: &mut View) -> Result<Option<String>> {
        Ok(Some(String::new()))
    }

    fn process(&self, _view: &mut View) -> Result<()> {
        Ok(())
    }

    fn sub_client(&self, _client_type: &str, _name: Option<&str>) -> Result<Box<dyn Component>> {
        Err(Error::internal("no sub clients"))
    }
}

/// Leaf whose header phase fails while its body renders fine
pub struct HeaderFailPart;

impl Component for HeaderFailPart {
    fn client_type(&self) -> &str {
        "test/page/badheader"
    }

    fn body(&self, _uid: &str, _view: &mut View) -> Result<String> {
        Ok("[h]".to_string())
    }

    fn header(&self, _uid: &str, _view: &mut View) -> Result<Option<String>> {
        Err(Error::internal("head assets unavailable"))
    }

    fn process(&self, _view: &mut View) -> Result<()> {
        Ok(())
    }

    fn sub_client(&self, _client_type: &str, _name: Option<&str>) -> Result<Box<dyn Component>> {
        Err(Error::internal("no sub clients"))
    }
}

/// Section composing the fixture leaves through the real composite helpers
pub struct PageSection {
    base: Composite,
}

impl PageSection {
    pub fn new(context: Context) -> Self {
        Self {
            base: Composite::new(context, "test/page", &["alpha", "beta", "gamma"]),
        }
    }
}

impl Component for PageSection {
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
        view.set("page_body", Value::String(html));

        let defaults = ["test/page/body-standard.html".to_string()];
        self.base.render(view, "template-body", &defaults)
    }

    fn header(&self, uid: &str, view: &mut View) -> Result<Option<String>> {
        let result = (|| {
            let html = self.base.header_parts(uid, view)?;
            view.set("page_header", Value::String(html));

            let defaults = ["test/page/header-standard.html".to_string()];
            self.base.render(view, "template-header", &defaults)
        })();

        Ok(self.base.swallow_header(result))
    }

    fn process(&self, view: &mut View) -> Result<()> {
        self.base.process_parts(view)
    }

    fn sub_client(&self, client_type: &str, name: Option<&str>) -> Result<Box<dyn Component>> {
        self.base.create_sub_client(client_type, name)
    }
}

/// Decorator wrapping the body output with a marker: `X<inner>`
pub struct MarkDecorator {
    inner: Box<dyn Component>,
    mark: &'static str,
}

impl MarkDecorator {
    pub fn new(inner: Box<dyn Component>, mark: &'static str) -> Self {
        Self { inner, mark }
    }
}

impl Component for MarkDecorator {
    fn client_type(&self) -> &str {
        self.inner.client_type()
    }

    fn body(&self, uid: &str, view: &mut View) -> Result<String> {
        Ok(format!("{}<{}>", self.mark, self.inner.body(uid, view)?))
    }

    fn header(&self, uid: &str, view: &mut View) -> Result<Option<String>> {
        self.inner.header(uid, view)
    }

    fn process(&self, view: &mut View) -> Result<()> {
        self.inner.process(view)
    }

    fn sub_client(&self, client_type: &str, name: Option<&str>) -> Result<Box<dyn Component>> {
        self.inner.sub_client(client_type, name)
    }
}

// ============================================================================
// Registrations
// ============================================================================

#[linkme::distributed_slice(COMPONENTS)]
static TEST_PAGE: ComponentEntry = ComponentEntry {
    client_type: "test/page",
    name: "Standard",
    description: "Fixture section",
    factory: |context| Ok(Box::new(PageSection::new(context.clone()))),
};

#[linkme::distributed_slice(COMPONENTS)]
static TEST_ALPHA: ComponentEntry = ComponentEntry {
    client_type: "test/page/alpha",
    name: "Standard",
    description: "Fixture leaf a",
    factory: |_context| {
        Ok(Box::new(StaticPart {
            client_type: "test/page/alpha",
            output: "[a]",
        }))
    },
};

#[linkme::distributed_slice(COMPONENTS)]
static TEST_BETA: ComponentEntry = ComponentEntry {
    client_type: "test/page/beta",
    name: "Standard",
    description: "Fixture leaf b",
    factory: |_context| {
        Ok(Box::new(StaticPart {
            client_type: "test/page/beta",
            output: "[b]",
        }))
    },
};

#[linkme::distributed_slice(COMPONENTS)]
static TEST_GAMMA: ComponentEntry = ComponentEntry {
    client_type: "test/page/gamma",
    name: "Standard",
    description: "Fixture leaf c",
    factory: |_context| {
        Ok(Box::new(StaticPart {
            client_type: "test/page/gamma",
            output: "[c]",
        }))
    },
};

#[linkme::distributed_slice(COMPONENTS)]
static TEST_BADDATA: ComponentEntry = ComponentEntry {
    client_type: "test/page/baddata",
    name: "Standard",
    description: "Fixture leaf failing with a data error",
    factory: |_context| Ok(Box::new(DataFailPart)),
};

#[linkme::distributed_slice(COMPONENTS)]
static TEST_CRASH: ComponentEntry = ComponentEntry {
    client_type: "test/page/crash",
    name: "Standard",
    description: "Fixture leaf failing unexpectedly",
    factory: |_context| Ok(Box::new(CrashPart)),
};

#[linkme::distributed_slice(COMPONENTS)]
static TEST_BADHEADER: ComponentEntry = ComponentEntry {
    client_type: "test/page/badheader",
    name: "Standard",
    description: "Fixture leaf whose header fails",
    factory: |_context| Ok(Box::new(HeaderFailPart)),
};

#[linkme::distributed_slice(DECORATORS)]
static MARK_ALPHA: DecoratorEntry = DecoratorEntry {
    name: "Alpha",
    description: "Marks body output with A",
    factory: |inner, _context| Box::new(MarkDecorator::new(inner, "A")),
};

#[linkme::distributed_slice(DECORATORS)]
static MARK_BETA: DecoratorEntry = DecoratorEntry {
    name: "Beta",
    description: "Marks body output with B",
    factory: |inner, _context| Box::new(MarkDecorator::new(inner, "B")),
};

#[linkme::distributed_slice(DECORATORS)]
static MARK_GAMMA: DecoratorEntry = DecoratorEntry {
    name: "Gamma",
    description: "Marks body output with G",
    factory: |inner, _context| Box::new(MarkDecorator::new(inner, "G")),
};
