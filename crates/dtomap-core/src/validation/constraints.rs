//! Field constraints understood by the schema validator
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use super::schema::SchemaValidator;
use super::types::{ValidationFailure, ValidationOptions};
use crate::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        )
        .expect("email pattern is valid")
    })
}

/// A single check applied to one field
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Field must be present and not null
    Defined,
    /// Field must not be missing, null or the empty string
    NotEmpty,
    IsString,
    IsNumber,
    IsInteger,
    IsBoolean,
    IsArray,
    IsObject,
    /// String length in characters, at least
    MinLength(usize),
    /// String length in characters, at most
    MaxLength(usize),
    Min(f64),
    Max(f64),
    /// String must match the pattern
    Matches(Regex),
    IsEmail,
    /// Value must equal one of the listed values
    IsIn(Vec<Value>),
    /// Object, or every element of an array, must satisfy the nested schema
    Nested(Box<SchemaValidator>),
}

impl Constraint {
    /// Compile a pattern constraint
    pub fn matches(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| Error::Configuration {
            message: format!("Invalid pattern '{}': {}", pattern, e),
            source: Some(e.into()),
        })?;
        Ok(Constraint::Matches(regex))
    }

    /// Nest a schema under a field
    pub fn nested(schema: SchemaValidator) -> Self {
        Constraint::Nested(Box::new(schema))
    }

    /// Rule name reported in failures
    pub fn rule_name(&self) -> &'static str {
        match self {
            Constraint::Defined => "isDefined",
            Constraint::NotEmpty => "isNotEmpty",
            Constraint::IsString => "isString",
            Constraint::IsNumber => "isNumber",
            Constraint::IsInteger => "isInt",
            Constraint::IsBoolean => "isBoolean",
            Constraint::IsArray => "isArray",
            Constraint::IsObject => "isObject",
            Constraint::MinLength(_) => "minLength",
            Constraint::MaxLength(_) => "maxLength",
            Constraint::Min(_) => "min",
            Constraint::Max(_) => "max",
            Constraint::Matches(_) => "matches",
            Constraint::IsEmail => "isEmail",
            Constraint::IsIn(_) => "isIn",
            Constraint::Nested(_) => "nested",
        }
    }

    /// Check one field value, `None` meaning the field is missing
    pub fn check(
        &self,
        field: &str,
        value: Option<&Value>,
        options: &ValidationOptions,
    ) -> Option<ValidationFailure> {
        if let Constraint::Nested(schema) = self {
            return check_nested(schema, field, value, options);
        }

        let message = match self {
            Constraint::Defined => (!is_defined(value))
                .then(|| format!("{} should not be null or undefined", field)),
            Constraint::NotEmpty => {
                let empty = !is_defined(value) || value.and_then(Value::as_str) == Some("");
                empty.then(|| format!("{} should not be empty", field))
            }
            Constraint::IsString => {
                (!matches!(value, Some(Value::String(_)))).then(|| format!("{} must be a string", field))
            }
            Constraint::IsNumber => (!matches!(value, Some(Value::Number(_))))
                .then(|| format!("{} must be a number conforming to the specified constraints", field)),
            Constraint::IsInteger => {
                (!value.map(is_integer).unwrap_or(false)).then(|| format!("{} must be an integer number", field))
            }
            Constraint::IsBoolean => {
                (!matches!(value, Some(Value::Bool(_)))).then(|| format!("{} must be a boolean value", field))
            }
            Constraint::IsArray => {
                (!matches!(value, Some(Value::Array(_)))).then(|| format!("{} must be an array", field))
            }
            Constraint::IsObject => {
                (!matches!(value, Some(Value::Object(_)))).then(|| format!("{} must be an object", field))
            }
            Constraint::MinLength(min) => {
                let ok = char_len(value).map(|len| len >= *min).unwrap_or(false);
                (!ok).then(|| format!("{} must be longer than or equal to {} characters", field, min))
            }
            Constraint::MaxLength(max) => {
                let ok = char_len(value).map(|len| len <= *max).unwrap_or(false);
                (!ok).then(|| format!("{} must be shorter than or equal to {} characters", field, max))
            }
            Constraint::Min(min) => {
                let ok = value.and_then(Value::as_f64).map(|n| n >= *min).unwrap_or(false);
                (!ok).then(|| format!("{} must not be less than {}", field, min))
            }
            Constraint::Max(max) => {
                let ok = value.and_then(Value::as_f64).map(|n| n <= *max).unwrap_or(false);
                (!ok).then(|| format!("{} must not be greater than {}", field, max))
            }
            Constraint::Matches(regex) => {
                let ok = value.and_then(Value::as_str).map(|s| regex.is_match(s)).unwrap_or(false);
                (!ok).then(|| format!("{} must match {} regular expression", field, regex.as_str()))
            }
            Constraint::IsEmail => {
                let ok = value.and_then(Value::as_str).map(|s| email_regex().is_match(s)).unwrap_or(false);
                (!ok).then(|| format!("{} must be an email", field))
            }
            Constraint::IsIn(allowed) => {
                let ok = value.map(|v| allowed.contains(v)).unwrap_or(false);
                (!ok).then(|| {
                    let listed: Vec<String> = allowed.iter().map(Value::to_string).collect();
                    format!("{} must be one of the following values: {}", field, listed.join(", "))
                })
            }
            Constraint::Nested(_) => None,
        }?;

        Some(ValidationFailure::new(field, self.rule_name(), message).with_value(value))
    }
}

fn is_defined(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null))
}

fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64() || n.as_f64().map(|f| f.fract() == 0.0).unwrap_or(false),
        _ => false,
    }
}

fn char_len(value: Option<&Value>) -> Option<usize> {
    value.and_then(Value::as_str).map(|s| s.chars().count())
}

// A missing field passes; pair with `Defined` to require it.
fn check_nested(
    schema: &SchemaValidator,
    field: &str,
    value: Option<&Value>,
    options: &ValidationOptions,
) -> Option<ValidationFailure> {
    let children = match value {
        None | Some(Value::Null) => return None,
        Some(Value::Object(map)) => schema.validate_object(map, options),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let element = i.to_string();
                let failures = match item {
                    Value::Object(map) => schema.validate_object(map, options),
                    other => vec![ValidationFailure::new(
                        element.clone(),
                        "isObject",
                        format!("{} must be an object", element),
                    )
                    .with_value(Some(other))],
                };
                (!failures.is_empty()).then(|| {
                    ValidationFailure::new(element.clone(), "nested", format!("{} has invalid nested values", element))
                        .with_children(failures)
                })
            })
            .collect(),
        Some(other) => {
            return Some(
                ValidationFailure::new(
                    field,
                    "nested",
                    format!("nested property {} must be either object or array", field),
                )
                .with_value(Some(other)),
            )
        }
    };

    if children.is_empty() {
        None
    } else {
        Some(
            ValidationFailure::new(field, "nested", format!("{} has invalid nested values", field))
                .with_children(children),
        )
    }
}
