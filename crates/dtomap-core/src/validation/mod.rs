//! Post-transform validation
//!
//! The mapper treats validation as an injected service: anything implementing
//! [`Validator`] can be attached to a mapper, and `transform_and_validate`
//! only looks at the failure list it returns. [`SchemaValidator`] is the
//! built-in implementation, a declarative list of [`Constraint`]s per field.
//!
//! - `types`: Failure records, options and the validator trait
//! - `constraints`: Individual field checks
//! - `schema`: The per-field schema validator
//! - `tests`: Test suite
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

pub mod types;
pub mod constraints;
pub mod schema;

// Re-export public API
pub use types::{ValidationFailure, ValidationOptions, Validator};
pub use constraints::Constraint;
pub use schema::SchemaValidator;
