//! Translator registry and field rule types
//!
//! - [`types`] - Rule variants and the read-only [`Source`] view
//! - [`registry`] - The ordered [`Translator`] registry
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

pub mod types;
pub mod registry;

pub use types::{Delegation, FieldRule, RuleFunction, Source};
pub use registry::Translator;
