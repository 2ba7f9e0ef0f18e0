//! Declarative per-field schema validator
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use super::constraints::Constraint;
use super::types::{ValidationFailure, ValidationOptions, Validator};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Validator built from a list of constraints per field
///
/// Fields are checked in declaration order and each field's constraints in
/// the order they were given, so failures come back in a stable order.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    fields: IndexMap<String, Vec<Constraint>>,
}

impl SchemaValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare constraints for a field, appending to any already declared
    pub fn field<I>(mut self, name: impl Into<String>, constraints: I) -> Self
    where
        I: IntoIterator<Item = Constraint>,
    {
        self.fields.entry(name.into()).or_default().extend(constraints);
        self
    }

    /// Declared field names in order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Validate one object against the schema
    pub fn validate_object(&self, object: &Map<String, Value>, options: &ValidationOptions) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();

        if options.forbid_unknown_fields {
            for (key, value) in object {
                if !self.fields.contains_key(key) {
                    failures.push(
                        ValidationFailure::new(key.clone(), "whitelistValidation", format!("property {} should not exist", key))
                            .with_value(Some(value)),
                    );
                }
            }
        }

        for (field, constraints) in &self.fields {
            let value = object.get(field);
            let skipping = options.skips(value);

            for constraint in constraints {
                // Skip options never silence an explicit presence check
                if skipping && !matches!(constraint, Constraint::Defined) {
                    continue;
                }
                if let Some(failure) = constraint.check(field, value, options) {
                    failures.push(failure);
                    if options.stop_at_first_error {
                        break;
                    }
                }
            }
        }

        failures
    }
}

impl Validator for SchemaValidator {
    fn validate(&self, value: &Value, options: &ValidationOptions) -> Vec<ValidationFailure> {
        match value {
            Value::Object(object) => self.validate_object(object, options),
            other => vec![ValidationFailure::new("", "isObject", "validated value must be an object").with_value(Some(other))],
        }
    }
}
