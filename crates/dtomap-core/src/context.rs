//! Ambient key/value context shared with field rules
//!
//! A [`Context`] travels alongside every transform call. Each mapper owns one,
//! and when a parent mapper delegates to a nested mapper the nested mapper sees
//! the parent's effective context overlaid with its own entries.
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open-ended string-keyed context data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    entries: Map<String, Value>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, replacing any previous value under the same key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style variant of [`Context::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Get a value from the context
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a string value from the context
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shallow merge of `self` and `own`, where keys in `own` win
    ///
    /// This is how a nested mapper combines the context handed down by its
    /// parent with its own pre-registered entries.
    pub fn overlay(&self, own: &Context) -> Context {
        if own.is_empty() {
            return self.clone();
        }
        let mut entries = self.entries.clone();
        for (key, value) in &own.entries {
            entries.insert(key.clone(), value.clone());
        }
        Context { entries }
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }
}

impl From<Map<String, Value>> for Context {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Context::new();
        for (key, value) in iter {
            context.set(key, value);
        }
        context
    }
}
