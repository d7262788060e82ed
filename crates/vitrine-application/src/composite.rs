//! Sub-part composition helpers
//!
//! [`Composite`] carries the behavior every tree component shares: resolving
//! the configured ordered sub-part list into child instances (memoized per
//! instance), driving the children through the render phases while isolating
//! their failures, and resolving the node's template through the candidate
//! fallback chain. Concrete components embed a `Composite` and delegate to
//! it; composition replaces the base-class inheritance the pattern is
//! usually built on elsewhere.
//!
//! ## Error conversion
//!
//! [`report_error`] implements the node-boundary policy: recoverable
//! categories (view/frontend/data) become localized messages on the view's
//! error list; anything else is logged with its chain and replaced by the
//! localized generic message. `body` and `process` apply it per child so a
//! failing sibling never suppresses the ones after it. `header` does not:
//! the whole header phase is guarded only generically via
//! [`Composite::swallow_header`], yielding no output and no visitor-facing
//! message on failure. That asymmetry is deliberate and mirrors the observed
//! behavior of the system this engine reimplements.

use once_cell::sync::OnceCell;
use tracing::error;

use vitrine_domain::constants::{CONFIG_CLIENT_PREFIX, I18N_CLIENT, MSG_UNRECOVERABLE};
use vitrine_domain::error::{Error, Result};
use vitrine_domain::view::View;

use crate::context::Context;
use crate::factory;
use crate::ports::Component;

/// Shared state and behavior of a tree component
///
/// Holds the component's type path, its default sub-part list and the
/// memoized child instances. Children are resolved on first use and reused
/// for the lifetime of the component instance, which is scoped to one
/// request.
pub struct Composite {
    context: Context,
    client_type: String,
    default_subparts: &'static [&'static str],
    children: OnceCell<Vec<Box<dyn Component>>>,
}

impl Composite {
    /// Create the composite state for a component
    pub fn new(
        context: Context,
        client_type: impl Into<String>,
        default_subparts: &'static [&'static str],
    ) -> Self {
        Self {
            context,
            client_type: client_type.into(),
            default_subparts,
            children: OnceCell::new(),
        }
    }

    /// The shared service context
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The component's type path
    pub fn client_type(&self) -> &str {
        &self.client_type
    }

    /// The ordered sub-part names: configured list or built-in default
    pub fn subpart_names(&self) -> Result<Vec<String>> {
        let path = format!("{CONFIG_CLIENT_PREFIX}/{}/subparts", self.client_type);
        match self.context.config().get_list(&path)? {
            Some(names) => Ok(names),
            None => Ok(self.default_subparts.iter().map(|s| (*s).to_string()).collect()),
        }
    }

    /// The resolved child components, memoized per instance
    pub fn sub_clients(&self) -> Result<&[Box<dyn Component>]> {
        let children = self.children.get_or_try_init(|| {
            self.subpart_names()?
                .iter()
                .map(|name| self.create_sub_client(name, None))
                .collect::<Result<Vec<_>>>()
        })?;
        Ok(children.as_slice())
    }

    /// Create a child component below this node's type path
    pub fn create_sub_client(
        &self,
        client_type: &str,
        name: Option<&str>,
    ) -> Result<Box<dyn Component>> {
        let path = format!("{}/{client_type}", self.client_type);
        factory::create_client(&self.context, &path, name)
    }

    /// Render the body of every child in order, isolating failures per child
    ///
    /// A failing child contributes nothing; its error is converted via
    /// [`report_error`] and the remaining siblings still render.
    pub fn body_parts(&self, uid: &str, view: &mut View) -> Result<String> {
        let mut html = String::new();
        for child in self.sub_clients()? {
            match child.body(uid, view) {
                Ok(part) => html.push_str(&part),
                Err(err) => self.report(err, view),
            }
        }
        Ok(html)
    }

    /// Render the header of every child in order
    ///
    /// Child failures propagate; the caller is expected to guard the whole
    /// header phase with [`Composite::swallow_header`].
    pub fn header_parts(&self, uid: &str, view: &mut View) -> Result<String> {
        let mut html = String::new();
        for child in self.sub_clients()? {
            if let Some(part) = child.header(uid, view)? {
                html.push_str(&part);
            }
        }
        Ok(html)
    }

    /// Run the process phase of every child in order, isolating failures
    pub fn process_parts(&self, view: &mut View) -> Result<()> {
        for child in self.sub_clients()? {
            if let Err(err) = child.process(view) {
                self.report(err, view);
            }
        }
        Ok(())
    }

    /// Convert an error into view state at this node's boundary
    pub fn report(&self, err: Error, view: &mut View) {
        report_error(&self.context, &self.client_type, err, view);
    }

    /// Guard the header phase: log failures and suppress their output
    ///
    /// Unlike the body path, no visitor-facing message is recorded.
    pub fn swallow_header(&self, result: Result<String>) -> Option<String> {
        match result {
            Ok(html) => Some(html),
            Err(err) => {
                error!(
                    client = %self.client_type,
                    error = ?err,
                    "header rendering failed, suppressing output"
                );
                None
            }
        }
    }

    /// Resolve the node's template through the candidate fallback chain
    ///
    /// Candidates are tried in order: the value configured under
    /// `client/html/<type>/<conf_suffix>`, then the given defaults. The
    /// first candidate the template engine knows wins.
    pub fn template(&self, conf_suffix: &str, defaults: &[String]) -> Result<String> {
        let path = format!("{CONFIG_CLIENT_PREFIX}/{}/{conf_suffix}", self.client_type);

        let mut candidates: Vec<String> = Vec::new();
        if let Some(configured) = self.context.config().get_string(&path)? {
            candidates.push(configured);
        }
        candidates.extend(defaults.iter().cloned());

        for candidate in &candidates {
            if self.context.templates().exists(candidate) {
                return Ok(candidate.clone());
            }
        }

        Err(Error::view(format!(
            "Template \"{}\" not available",
            candidates.join("\", \"")
        )))
    }

    /// Resolve a template and render it with the given view
    pub fn render(&self, view: &View, conf_suffix: &str, defaults: &[String]) -> Result<String> {
        let template = self.template(conf_suffix, defaults)?;
        self.context.templates().render(&template, view)
    }
}

/// Node-boundary error conversion policy
///
/// Recoverable categories are translated through their catalog domain and
/// appended to the view's error list. Everything else is logged with its
/// chain and replaced by the localized generic message; nothing propagates.
pub fn report_error(context: &Context, client_type: &str, err: Error, view: &mut View) {
    match err.recoverable_domain() {
        Some(domain) => {
            let message = context.translator().translate(domain, &err.to_string());
            view.add_error(message);
        }
        None => {
            error!(client = %client_type, error = ?err, "client rendering failed");
            let message = context.translator().translate(I18N_CLIENT, MSG_UNRECOVERABLE);
            view.add_error(message);
        }
    }
}
