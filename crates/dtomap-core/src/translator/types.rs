//! Core rule types for the translator registry
//!
//! A target field is produced either by a function rule, which computes the
//! value from the whole source item and the context, or by a delegation rule,
//! which hands one source field to a nested mapper.
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use crate::context::Context;
use crate::mapper::Mapper;
use crate::target::Target;
use crate::Result;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Read-only view of the source item handed to function rules
///
/// Rules see every field of the original item, never the partially built
/// output. The view borrows the item immutably, so nothing a rule does can be
/// observed by the rules that run after it.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Source<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Get a field of the source item
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    /// Get a string field, `None` when missing or not a string
    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn get_array(&self, key: &str) -> Option<&'a Vec<Value>> {
        self.get(key).and_then(Value::as_array)
    }

    pub fn get_object(&self, key: &str) -> Option<&'a Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    /// Whether the field is present (an explicit `null` counts as present)
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a String> {
        self.fields.keys()
    }

    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.fields
    }

    /// Owned copy of the source item
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// A function that computes one target field
pub type RuleFunction = Arc<dyn Fn(&Source<'_>, &Context) -> Result<Value> + Send + Sync>;

/// Target field produced by running a nested mapper over one source field
#[derive(Clone)]
pub struct Delegation {
    /// Field of the source item handed to the nested mapper
    pub source_key: String,
    /// Mapper applied to that field's value (item or array)
    pub mapper: Arc<Mapper>,
    /// Overrides the nested mapper's own target for this field
    pub target: Option<Target>,
}

impl fmt::Debug for Delegation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegation")
            .field("source_key", &self.source_key)
            .field("mapper", &self.mapper)
            .field("target", &self.target)
            .finish()
    }
}

/// Rule stored for one target field
#[derive(Clone)]
pub enum FieldRule {
    /// Compute the value from the source item and context
    Function(RuleFunction),
    /// Delegate one source field to a nested mapper
    Delegate(Delegation),
}

impl FieldRule {
    /// Wrap a closure as a function rule
    pub fn function<F>(rule: F) -> Self
    where
        F: Fn(&Source<'_>, &Context) -> Result<Value> + Send + Sync + 'static,
    {
        FieldRule::Function(Arc::new(rule))
    }

    /// Build a delegation rule
    pub fn delegate(source_key: impl Into<String>, mapper: Arc<Mapper>, target: Option<Target>) -> Self {
        FieldRule::Delegate(Delegation {
            source_key: source_key.into(),
            mapper,
            target,
        })
    }

    pub fn is_function(&self) -> bool {
        matches!(self, FieldRule::Function(_))
    }

    pub fn as_delegation(&self) -> Option<&Delegation> {
        match self {
            FieldRule::Delegate(delegation) => Some(delegation),
            FieldRule::Function(_) => None,
        }
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRule::Function(_) => f.write_str("Function(..)"),
            FieldRule::Delegate(delegation) => f.debug_tuple("Delegate").field(delegation).finish(),
        }
    }
}
