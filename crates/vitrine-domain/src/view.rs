//! Rendering context passed down the component tree
//!
//! A [`View`] is created once per render pass and handed to every component
//! as `&mut View`. It carries the request parameters, the key/value data the
//! templates render from, and three accumulators that only ever grow during
//! a pass: the visitor-facing error list, the cache tag set and the earliest
//! expiry timestamp of the subtree.
//!
//! Passing the context by mutable reference makes the cooperative-sequential
//! discipline of the render pass a compile-time guarantee: there is exactly
//! one writer at any point of the tree walk.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Shared rendering context for one render pass
#[derive(Debug, Default, Clone)]
pub struct View {
    /// Request parameters (query/form values)
    params: HashMap<String, String>,
    /// Template data written by components, read by the template engine
    data: Map<String, Value>,
    /// Visitor-facing error messages collected during the pass
    errors: Vec<String>,
    /// Cache invalidation tags collected during the pass
    tags: BTreeSet<String>,
    /// Earliest expiry timestamp of all rendered fragments
    expires: Option<DateTime<Utc>>,
}

impl View {
    /// Create an empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view carrying the given request parameters
    pub fn with_params(params: HashMap<String, String>) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Look up a request parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Request parameters as a map
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Set a template data value
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    /// Serialize a value into the template data
    pub fn set_serialize<T: Serialize>(&mut self, key: impl Into<String>, value: &T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|err| Error::Internal {
            message: format!("View data is not serializable: {err}"),
        })?;
        self.data.insert(key.into(), value);
        Ok(())
    }

    /// Look up a template data value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Template data as a map, for the template engine adapter
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Append a visitor-facing error message, ignoring exact duplicates
    pub fn add_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.errors.contains(&message) {
            self.errors.push(message);
        }
    }

    /// Error messages collected so far, in insertion order
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Add a cache invalidation tag
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    /// Add several cache invalidation tags
    pub fn add_tags<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for tag in tags {
            self.tags.insert(tag.into());
        }
    }

    /// Cache tags collected so far
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Merge an expiry timestamp, keeping the earliest one
    pub fn merge_expires(&mut self, when: DateTime<Utc>) {
        self.expires = match self.expires {
            Some(current) if current <= when => Some(current),
            _ => Some(when),
        };
    }

    /// Earliest expiry of the pass, or `None` when nothing expires
    pub fn expires(&self) -> Option<DateTime<Utc>> {
        self.expires
    }
}
