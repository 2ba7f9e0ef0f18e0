//! Translator registry mapping target fields to rules
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use super::types::{FieldRule, RuleFunction};
use crate::mapper::Mapper;
use crate::target::Target;
use indexmap::IndexMap;
use std::sync::Arc;

/// Per-mapper set of field rules
///
/// Keys are unique and the last registration for a key wins. Iteration follows
/// the order in which each key was first registered; that order only decides
/// the field order of the output, never which values a rule can see.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    rules: IndexMap<String, Option<FieldRule>>,
}

impl Translator {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a rule for `target_key`
    pub fn set_rule(&mut self, target_key: impl Into<String>, rule: FieldRule) {
        self.rules.insert(target_key.into(), Some(rule));
    }

    /// Register or replace a function rule for `target_key`
    pub fn set_function_rule(&mut self, target_key: impl Into<String>, rule: RuleFunction) {
        self.set_rule(target_key, FieldRule::Function(rule));
    }

    /// Register or replace a delegation rule for `target_key`
    pub fn set_delegation_rule(
        &mut self,
        target_key: impl Into<String>,
        source_key: impl Into<String>,
        mapper: Arc<Mapper>,
        target: Option<Target>,
    ) {
        self.set_rule(target_key, FieldRule::delegate(source_key, mapper, target));
    }

    /// Mark `target_key` absent so it is omitted from every later output
    pub fn clear(&mut self, target_key: &str) {
        if let Some(slot) = self.rules.get_mut(target_key) {
            *slot = None;
        }
    }

    /// The active rule for `target_key`, if any
    pub fn get(&self, target_key: &str) -> Option<&FieldRule> {
        self.rules.get(target_key).and_then(Option::as_ref)
    }

    pub fn contains(&self, target_key: &str) -> bool {
        self.get(target_key).is_some()
    }

    /// Active rules in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules
            .iter()
            .filter_map(|(key, rule)| rule.as_ref().map(|rule| (key.as_str(), rule)))
    }

    /// Active target keys in registry order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Number of active rules
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
