//! Core validation types
//!
//! This module contains the failure record produced by validators, the options
//! that tune a validation run, and the [`Validator`] seam the mapper calls.
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// One structured validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Field that failed
    pub field: String,
    /// Name of the rule that rejected the field
    pub rule: String,
    /// Human-readable explanation
    pub message: String,
    /// Offending value, `None` when the field was missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Failures found inside a nested value
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ValidationFailure>,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Attach the offending value
    pub fn with_value(mut self, value: Option<&Value>) -> Self {
        self.value = value.cloned();
        self
    }

    /// Attach nested failures
    pub fn with_children(mut self, children: Vec<ValidationFailure>) -> Self {
        self.children = children;
        self
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.field, self.rule, self.message)?;
        for child in &self.children {
            write!(f, "\n  - {}", child)?;
        }
        Ok(())
    }
}

/// Options for a validation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Skip constraints of fields that are missing or null
    pub skip_missing_properties: bool,
    /// Skip constraints of fields that are null
    pub skip_null_properties: bool,
    /// Skip constraints of fields that are missing
    pub skip_undefined_properties: bool,
    /// Report fields the schema does not declare
    pub forbid_unknown_fields: bool,
    /// Report only the first failing constraint of each field
    pub stop_at_first_error: bool,
}

impl ValidationOptions {
    /// Parse options from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Configuration {
            message: format!("Invalid validation options: {}", e),
            source: Some(e.into()),
        })
    }

    /// Load options from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::Configuration {
            message: format!("Cannot read validation options from {}", path.display()),
            source: Some(e.into()),
        })?;
        Self::from_json_str(&content)
    }

    /// Whether constraints of a field with this value should be skipped
    pub(crate) fn skips(&self, value: Option<&Value>) -> bool {
        match value {
            None => self.skip_missing_properties || self.skip_undefined_properties,
            Some(Value::Null) => self.skip_missing_properties || self.skip_null_properties,
            Some(_) => false,
        }
    }
}

/// Validation step run over transformed results
///
/// An empty list means the value is valid.
pub trait Validator: Send + Sync {
    fn validate(&self, value: &Value, options: &ValidationOptions) -> Vec<ValidationFailure>;
}

impl<F> Validator for F
where
    F: Fn(&Value, &ValidationOptions) -> Vec<ValidationFailure> + Send + Sync,
{
    fn validate(&self, value: &Value, options: &ValidationOptions) -> Vec<ValidationFailure> {
        self(value, options)
    }
}
