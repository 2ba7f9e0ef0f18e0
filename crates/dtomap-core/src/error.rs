//! Error types for the Dtomap core library
//!
//! This module defines the error handling system for the mapping engine,
//! using thiserror for ergonomic error definitions and anyhow for flexible error contexts.
//!
//! Two families of failure exist. Rule execution failures (anything a field rule,
//! a nested mapper or a target builder returns) travel back to the caller untouched.
//! Validation failures found by [`crate::Mapper::transform_and_validate`] are
//! collected into a [`TransformationError`].
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use crate::validation::ValidationFailure;
use thiserror::Error;

/// Main error type for Dtomap operations
#[derive(Error, Debug)]
pub enum Error {
    /// A field rule failed while computing its value
    #[error("Rule failed: {message}")]
    Rule {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A source item had a shape the engine cannot read fields from
    #[error("Invalid source: expected {expected}, found {found}")]
    InvalidSource {
        expected: String,
        found: String,
    },

    /// Building a typed result from the assembled output failed
    #[error("Failed to build {target}: {message}")]
    Build {
        target: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Post-transform validation rejected the result
    #[error(transparent)]
    Transformation(#[from] TransformationError),

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for rule authors reporting a failure without an underlying cause
    pub fn rule(message: impl Into<String>) -> Self {
        Error::Rule {
            message: message.into(),
            source: None,
        }
    }

    /// Whether this error came from post-transform validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Transformation(_))
    }

    /// The validation error, if this is one
    pub fn as_transformation(&self) -> Option<&TransformationError> {
        match self {
            Error::Transformation(err) => Some(err),
            _ => None,
        }
    }
}

/// Validation failure raised by `transform_and_validate`
///
/// For a single item `index` is `None` and `errors` holds every failure the
/// validator reported. For an array input `index` names the first element that
/// failed and `errors` holds that element's failures only.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct TransformationError {
    pub message: String,
    pub errors: Vec<ValidationFailure>,
    pub index: Option<usize>,
}

impl TransformationError {
    /// Failure of a single transformed item
    pub fn for_item(errors: Vec<ValidationFailure>) -> Self {
        Self {
            message: "Validation failed".to_string(),
            errors,
            index: None,
        }
    }

    /// Failure of the element at `index` of an array transform
    pub fn at_position(index: usize, errors: Vec<ValidationFailure>) -> Self {
        Self {
            message: format!("Validation failed at position {}", index),
            errors,
            index: Some(index),
        }
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}
