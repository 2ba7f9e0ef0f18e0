//! Builder for creating mappers
//!
//! This module provides a fluent builder API for configuring a [`Mapper`]
//! in a single expression.
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use super::core::Mapper;
use crate::context::Context;
use crate::target::Target;
use crate::translator::Source;
use crate::validation::Validator;
use crate::Result;
use serde_json::Value;
use std::sync::Arc;

/// Builder for creating mappers
#[derive(Debug, Default)]
pub struct MapperBuilder {
    mapper: Mapper,
}

impl MapperBuilder {
    /// Create a new mapper builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a function rule
    pub fn mapping<F>(mut self, target_key: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&Source<'_>, &Context) -> Result<Value> + Send + Sync + 'static,
    {
        self.mapper.add_mapping(target_key, rule);
        self
    }

    /// Add a delegation to a nested mapper
    pub fn mapper(
        mut self,
        target_key: impl Into<String>,
        source_key: impl Into<String>,
        mapper: impl Into<Arc<Mapper>>,
    ) -> Self {
        self.mapper.add_mapper(target_key, source_key, mapper);
        self
    }

    /// Add a delegation whose sub-result is built through `target`
    pub fn mapper_with_target(
        mut self,
        target_key: impl Into<String>,
        source_key: impl Into<String>,
        target: Target,
        mapper: impl Into<Arc<Mapper>>,
    ) -> Self {
        self.mapper.add_mapper_with_target(target_key, source_key, target, mapper);
        self
    }

    /// Set one entry of the mapper's own context
    pub fn context_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.mapper.context_mut().set(key, value);
        self
    }

    /// Set the target
    pub fn target(mut self, target: Target) -> Self {
        self.mapper = self.mapper.with_target(target);
        self
    }

    /// Set the validator
    pub fn validator<V>(mut self, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.mapper = self.mapper.with_validator(validator);
        self
    }

    /// Build the mapper
    pub fn build(self) -> Mapper {
        self.mapper
    }
}
