//! Dtomap Core - Declarative object-to-object mapping engine
//!
//! This crate turns source "model" values into target "DTO" values using a
//! registry of per-field rules, recursing into nested mappers for nested
//! fields and optionally validating the results.
//!
//! # Main Components
//!
//! - **Translator**: The per-mapper registry of function and delegation rules
//! - **Mapper**: Registration, recursive transform and context propagation
//! - **Target**: Injected construction of typed results
//! - **Validation**: The validator seam, options and a built-in schema validator
//! - **Error Handling**: Error types using `thiserror` and `anyhow`
//!
//! # Example
//!
//! ```
//! use dtomap_core::{Constraint, Mapper, Result, SchemaValidator};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let mut mapper = Mapper::new()
//!         .with_validator(SchemaValidator::new().field("email", [Constraint::IsEmail]));
//!     mapper.add_mapping("email", |src, _| Ok(src.get("email").cloned().unwrap_or_default()));
//!
//!     let dto = mapper.transform_and_validate(&json!({"email": "agutierrezt@slabcode.com"}), None)?;
//!     assert_eq!(dto, json!({"email": "agutierrezt@slabcode.com"}));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod context;
pub mod translator;
pub mod target;
pub mod validation;
pub mod mapper;

// Re-export main types for convenience
pub use error::{Error, Result, TransformationError};
pub use context::Context;
pub use translator::{Delegation, FieldRule, RuleFunction, Source, Translator};
pub use target::Target;
pub use validation::{Constraint, SchemaValidator, ValidationFailure, ValidationOptions, Validator};
pub use mapper::{Mapper, MapperBuilder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_mapper_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Mapper>();
        assert_send_sync::<Translator>();
    }
}
