//! Vitrine - Entry Point
//!
//! Renders a page from its root components and prints the result. Useful
//! for previewing layouts and configuration without a web server:
//!
//! ```text
//! vitrine --config vitrine.toml locale/select
//! vitrine --param loc-languageid=de locale/select
//! vitrine --order '{"id":"1042","payment_status":"pending"}' email/payment/html
//! ```

// Force-link vitrine-components to ensure linkme registrations are included
extern crate vitrine_components;

use std::collections::HashMap;

use anyhow::Context as _;
use clap::Parser;

use vitrine_application::PageRenderer;
use vitrine_components::email::payment::VIEW_ORDER;
use vitrine_domain::view::View;
use vitrine_infrastructure::{bootstrap, init_logging};

/// Command line interface for the Vitrine page renderer
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Vitrine - Composable storefront page rendering engine")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Request parameters as key=value pairs
    #[arg(short, long)]
    pub param: Vec<String>,

    /// Order snapshot as JSON, stored in the view for email components
    #[arg(long)]
    pub order: Option<String>,

    /// Root component type paths to render
    #[arg(default_value = "locale/select")]
    pub clients: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, context) = bootstrap(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    let mut params: HashMap<String, String> = HashMap::new();
    for pair in &cli.param {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("Invalid parameter \"{pair}\", expected key=value"))?;
        params.insert(key.to_string(), value.to_string());
    }

    let renderer = PageRenderer::new(context);
    let clients: Vec<&str> = cli.clients.iter().map(String::as_str).collect();

    let page = if let Some(order) = &cli.order {
        // The order snapshot travels through the view like in a real
        // request; reuse the renderer but seed the snapshot first.
        let order: serde_json::Value =
            serde_json::from_str(order).context("Invalid order JSON")?;
        let mut view = View::with_params(params);
        view.set(VIEW_ORDER, order);
        renderer.render_with_view(&clients, view)?
    } else {
        renderer.render(&clients, params)?
    };

    if !page.header.is_empty() {
        println!("<!-- header -->\n{}", page.header);
    }
    println!("{}", page.body);

    if !page.errors.is_empty() {
        eprintln!("errors:");
        for error in &page.errors {
            eprintln!("  - {error}");
        }
    }

    Ok(())
}
