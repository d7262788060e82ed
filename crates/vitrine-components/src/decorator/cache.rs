//! Fragment cache decorator
//!
//! Caches the rendered body and header markup of the wrapped component
//! across requests, keyed by type path and placement uid. The fragment
//! stores the cache tags and the expiry its subtree contributed during the
//! original render and replays them into the view on every hit, so
//! surrounding cache layers still see correct invalidation data.
//!
//! Expired fragments are dropped on access. `process` is never cached.
//!
//! Only wrap self-contained fragments: a cached hit skips the subtree
//! entirely, so view data the subtree would seed for *other* components is
//! not recomputed.

use chrono::{DateTime, Utc};
use moka::sync::Cache;
use once_cell::sync::Lazy;

use vitrine_application::registry::{DECORATORS, DecoratorEntry};
use vitrine_application::{Component, Context};
use vitrine_domain::error::Result;
use vitrine_domain::view::View;

/// Maximum number of fragments kept in the process-wide cache
const FRAGMENT_CACHE_CAPACITY: u64 = 10_000;

/// One cached render result with its invalidation data
#[derive(Clone)]
struct CachedFragment {
    html: String,
    tags: Vec<String>,
    expires: Option<DateTime<Utc>>,
}

// Process-wide fragment store shared by all cache decorator instances.
static FRAGMENTS: Lazy<Cache<String, CachedFragment>> =
    Lazy::new(|| Cache::new(FRAGMENT_CACHE_CAPACITY));

/// Decorator caching rendered fragments across requests
pub struct CacheDecorator {
    inner: Box<dyn Component>,
}

impl CacheDecorator {
    /// Wrap a component
    pub fn new(inner: Box<dyn Component>) -> Self {
        Self { inner }
    }

    /// Drop every cached fragment
    ///
    /// Storefronts call this after locale or catalog data changes.
    pub fn invalidate_all() {
        FRAGMENTS.invalidate_all();
    }

    fn key(&self, uid: &str, phase: &str) -> String {
        format!("{}:{uid}:{phase}", self.inner.client_type())
    }

    /// Return a live cached fragment, dropping it when expired
    fn lookup(&self, key: &str) -> Option<CachedFragment> {
        let fragment = FRAGMENTS.get(key)?;
        if let Some(expires) = fragment.expires {
            if expires <= Utc::now() {
                FRAGMENTS.invalidate(key);
                return None;
            }
        }
        Some(fragment)
    }

    /// Replay a fragment's invalidation data into the view
    fn replay(fragment: &CachedFragment, view: &mut View) {
        view.add_tags(fragment.tags.iter().cloned());
        if let Some(expires) = fragment.expires {
            view.merge_expires(expires);
        }
    }

    /// Store a render result with the tag/expiry delta of the subtree
    fn store(
        &self,
        key: String,
        html: &str,
        tags_before: &std::collections::BTreeSet<String>,
        expires_before: Option<DateTime<Utc>>,
        view: &View,
    ) {
        let tags = view.tags().difference(tags_before).cloned().collect();
        // Only attribute the pass expiry to this fragment when the subtree
        // changed it; anything else belongs to other parts of the page.
        let expires = match (expires_before, view.expires()) {
            (before, after) if before != after => after,
            _ => None,
        };
        FRAGMENTS.insert(
            key,
            CachedFragment {
                html: html.to_string(),
                tags,
                expires,
            },
        );
    }
}

impl Component for CacheDecorator {
    fn client_type(&self) -> &str {
        self.inner.client_type()
    }

    fn body(&self, uid: &str, view: &mut View) -> Result<String> {
        let key = self.key(uid, "body");
        if let Some(fragment) = self.lookup(&key) {
            Self::replay(&fragment, view);
            return Ok(fragment.html);
        }

        let tags_before = view.tags().clone();
        let expires_before = view.expires();
        let html = self.inner.body(uid, view)?;
        self.store(key, &html, &tags_before, expires_before, view);
        Ok(html)
    }

    fn header(&self, uid: &str, view: &mut View) -> Result<Option<String>> {
        let key = self.key(uid, "header");
        if let Some(fragment) = self.lookup(&key) {
            Self::replay(&fragment, view);
            return Ok(Some(fragment.html));
        }

        let tags_before = view.tags().clone();
        let expires_before = view.expires();
        match self.inner.header(uid, view)? {
            Some(html) => {
                self.store(key, &html, &tags_before, expires_before, view);
                Ok(Some(html))
            }
            // Suppressed headers are not cached; the failure may be transient.
            None => Ok(None),
        }
    }

    fn process(&self, view: &mut View) -> Result<()> {
        self.inner.process(view)
    }

    fn sub_client(&self, client_type: &str, name: Option<&str>) -> Result<Box<dyn Component>> {
        self.inner.sub_client(client_type, name)
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(DECORATORS)]
static CACHE_DECORATOR: DecoratorEntry = DecoratorEntry {
    name: "Cache",
    description: "Caches rendered fragments, replaying tags and expiry",
    factory: |inner, _context: &Context| Box::new(CacheDecorator::new(inner)),
};
