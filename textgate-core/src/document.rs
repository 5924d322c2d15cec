//! Document model seen by conditions
//!
//! A document is a reference (URL, path, ...) plus multi-valued string
//! metadata. Its content is never stored here: conditions receive it as a
//! separate reader so that it can be streamed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multi-valued string properties attached to a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: BTreeMap<String, Vec<String>>,
}

impl Metadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to `key`
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(key.into()).or_default().push(value.into());
    }

    /// Replace all values of `key` with a single value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), vec![value.into()]);
    }

    /// First value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of `key`, empty when the key is absent
    pub fn get_all(&self, key: &str) -> &[String] {
        self.fields.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `key` has at least one value
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(|values| !values.is_empty())
    }

    /// Remove `key`, returning its values
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.fields.remove(key)
    }

    /// Iterate over keys and their values in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no keys
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Document being handled by a condition
#[derive(Debug, Clone, Default)]
pub struct HandlerDoc {
    /// Document reference, usually its URL or path
    pub reference: String,
    /// Document metadata, which conditions may update
    pub metadata: Metadata,
}

impl HandlerDoc {
    /// Create a document with empty metadata
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            metadata: Metadata::new(),
        }
    }

    /// Create a document with the given metadata
    pub fn with_metadata(reference: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            reference: reference.into(),
            metadata,
        }
    }
}

/// Whether a document is handled before or after parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseState {
    /// Raw content, before parsing
    Pre,
    /// Extracted text, after parsing
    #[default]
    Post,
}

impl ParseState {
    /// Whether this is the pre-parse state
    pub fn is_pre(self) -> bool {
        self == ParseState::Pre
    }
}
