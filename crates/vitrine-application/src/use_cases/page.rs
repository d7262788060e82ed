//! Page rendering use case
//!
//! Drives a list of root components through the three lifecycle phases for
//! one request: `process` first (side effects, e.g. persisting a locale
//! selection), then `header`, then `body`. The assembled markup and the
//! accumulators collected on the view are returned as a [`Page`] snapshot.

use std::collections::HashMap;

use tracing::error;

use vitrine_domain::error::Result;
use vitrine_domain::value_objects::Page;
use vitrine_domain::view::View;

use crate::composite::report_error;
use crate::context::Context;
use crate::factory;
use crate::ports::Component;

/// Renders one page from its configured root components
pub struct PageRenderer {
    context: Context,
}

impl PageRenderer {
    /// Create a renderer over the given service context
    pub fn new(context: Context) -> Self {
        Self { context }
    }

    /// Render a page from the given root component type paths
    ///
    /// Root components are created eagerly; a factory failure is fatal and
    /// propagates (bad configuration must not render half a page). Render
    /// failures of a root are converted with the same policy the tree
    /// applies at every node, so one broken root never suppresses the rest
    /// of the page.
    pub fn render(&self, client_types: &[&str], params: HashMap<String, String>) -> Result<Page> {
        self.render_with_view(client_types, View::with_params(params))
    }

    /// Render a page over a pre-seeded view
    ///
    /// Callers use this to store data the components expect before the pass
    /// starts, e.g. the order snapshot for email components.
    pub fn render_with_view(&self, client_types: &[&str], mut view: View) -> Result<Page> {
        let mut clients: Vec<Box<dyn Component>> = Vec::with_capacity(client_types.len());
        for client_type in client_types {
            clients.push(factory::create_client(&self.context, client_type, None)?);
        }

        let uid = "";

        for client in &clients {
            if let Err(err) = client.process(&mut view) {
                report_error(&self.context, client.client_type(), err, &mut view);
            }
        }

        let mut header = String::new();
        for client in &clients {
            match client.header(uid, &mut view) {
                Ok(Some(part)) => header.push_str(&part),
                Ok(None) => {}
                Err(err) => {
                    // Components guard their own header phase; an Err here
                    // means a bare implementation, treated the same way.
                    error!(client = %client.client_type(), error = ?err, "header rendering failed");
                }
            }
        }

        let mut body = String::new();
        for client in &clients {
            match client.body(uid, &mut view) {
                Ok(part) => body.push_str(&part),
                Err(err) => report_error(&self.context, client.client_type(), err, &mut view),
            }
        }

        Ok(Page {
            body,
            header,
            errors: view.errors().to_vec(),
            tags: view.tags().iter().cloned().collect(),
            expires: view.expires(),
        })
    }
}
