//! Phase tracing decorator
//!
//! Emits a debug event around every lifecycle phase of the wrapped
//! component, including the elapsed wall-clock time. Configure it through
//! the decorator lists, e.g.
//! `client/html/common/decorators/default = ["Log"]`.

use std::time::Instant;

use tracing::debug;

use vitrine_application::registry::{DECORATORS, DecoratorEntry};
use vitrine_application::{Component, Context};
use vitrine_domain::error::Result;
use vitrine_domain::view::View;

/// Decorator tracing phase entry/exit and timing
pub struct LogDecorator {
    inner: Box<dyn Component>,
}

impl LogDecorator {
    /// Wrap a component
    pub fn new(inner: Box<dyn Component>) -> Self {
        Self { inner }
    }
}

impl Component for LogDecorator {
    fn client_type(&self) -> &str {
        self.inner.client_type()
    }

    fn body(&self, uid: &str, view: &mut View) -> Result<String> {
        let started = Instant::now();
        let result = self.inner.body(uid, view);
        debug!(
            client = %self.inner.client_type(),
            uid,
            elapsed_us = started.elapsed().as_micros() as u64,
            ok = result.is_ok(),
            "body rendered"
        );
        result
    }

    fn header(&self, uid: &str, view: &mut View) -> Result<Option<String>> {
        let started = Instant::now();
        let result = self.inner.header(uid, view);
        debug!(
            client = %self.inner.client_type(),
            uid,
            elapsed_us = started.elapsed().as_micros() as u64,
            ok = result.is_ok(),
            "header rendered"
        );
        result
    }

    fn process(&self, view: &mut View) -> Result<()> {
        let started = Instant::now();
        let result = self.inner.process(view);
        debug!(
            client = %self.inner.client_type(),
            elapsed_us = started.elapsed().as_micros() as u64,
            ok = result.is_ok(),
            "processed"
        );
        result
    }

    fn sub_client(&self, client_type: &str, name: Option<&str>) -> Result<Box<dyn Component>> {
        self.inner.sub_client(client_type, name)
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(DECORATORS)]
static LOG_DECORATOR: DecoratorEntry = DecoratorEntry {
    name: "Log",
    description: "Traces phase entry/exit and timing",
    factory: |inner, _context: &Context| Box::new(LogDecorator::new(inner)),
};
