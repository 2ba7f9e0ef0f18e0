//! Mapper struct and rule registration
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use crate::context::Context;
use crate::target::Target;
use crate::translator::{FieldRule, Source, Translator};
use crate::validation::Validator;
use crate::Result;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Declarative model-to-DTO mapper
///
/// A mapper owns one [`Translator`] of field rules, its own [`Context`], an
/// optional [`Target`] that builds the final value of each item and an
/// optional [`Validator`] used by `transform_and_validate`. It is configured
/// through `&mut self` registration calls and then reused for any number of
/// transforms, which only need `&self`.
///
/// # Example
///
/// ```
/// use dtomap_core::Mapper;
/// use serde_json::json;
///
/// let mut mapper = Mapper::new();
/// mapper
///     .add_mapping("fullName", |src, _| {
///         Ok(json!(format!("{} {}", src.get_str("name").unwrap_or(""), src.get_str("lastName").unwrap_or(""))))
///     })
///     .add_mapping("email", |src, _| Ok(src.get("email").cloned().unwrap_or(json!(""))));
///
/// let dto = mapper
///     .transform(&json!({"name": "Andres", "lastName": "Gutierrez", "email": "agutierrezt@slabcode.com"}))
///     .unwrap();
/// assert_eq!(dto, json!({"fullName": "Andres Gutierrez", "email": "agutierrezt@slabcode.com"}));
/// ```
#[derive(Clone, Default)]
pub struct Mapper {
    pub(crate) translator: Translator,
    pub(crate) context: Context,
    pub(crate) target: Option<Target>,
    pub(crate) validator: Option<Arc<dyn Validator>>,
}

impl Mapper {
    /// Create a mapper with no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every item of this mapper's output through `target`
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    /// Validator consulted by `transform_and_validate`
    pub fn with_validator<V>(mut self, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Replace the mapper's own context
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Register a function rule for `target_key`
    ///
    /// The rule receives a read-only view of the whole source item and the
    /// effective context of the call. Registering the same key again replaces
    /// the previous rule.
    pub fn add_mapping<F>(&mut self, target_key: impl Into<String>, rule: F) -> &mut Self
    where
        F: Fn(&Source<'_>, &Context) -> Result<Value> + Send + Sync + 'static,
    {
        let target_key = target_key.into();
        log::debug!("Registering function rule for '{}'", target_key);
        self.translator.set_rule(target_key, FieldRule::function(rule));
        self
    }

    /// Produce `target_key` by running `mapper` over the source field `source_key`
    ///
    /// Arrays are mapped element by element. When the source item has no
    /// `source_key` field the target field is left out of the output.
    pub fn add_mapper(
        &mut self,
        target_key: impl Into<String>,
        source_key: impl Into<String>,
        mapper: impl Into<Arc<Mapper>>,
    ) -> &mut Self {
        self.register_delegation(target_key.into(), source_key.into(), mapper.into(), None)
    }

    /// Like [`Mapper::add_mapper`], building the sub-result through `target`
    /// instead of the nested mapper's own target
    pub fn add_mapper_with_target(
        &mut self,
        target_key: impl Into<String>,
        source_key: impl Into<String>,
        target: Target,
        mapper: impl Into<Arc<Mapper>>,
    ) -> &mut Self {
        self.register_delegation(target_key.into(), source_key.into(), mapper.into(), Some(target))
    }

    fn register_delegation(
        &mut self,
        target_key: String,
        source_key: String,
        mapper: Arc<Mapper>,
        target: Option<Target>,
    ) -> &mut Self {
        log::debug!("Registering delegation '{}' <- '{}'", target_key, source_key);
        self.translator.set_delegation_rule(target_key, source_key, mapper, target);
        self
    }

    /// Stop producing `target_key` from now on
    pub fn remove_mapping(&mut self, target_key: &str) -> &mut Self {
        log::debug!("Removing rule for '{}'", target_key);
        self.translator.clear(target_key);
        self
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// The mapper's own context
    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub fn set_context(&mut self, context: Context) {
        self.context = context;
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("translator", &self.translator)
            .field("context", &self.context)
            .field("target", &self.target)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}
