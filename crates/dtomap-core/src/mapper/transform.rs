//! Transform algorithm
//!
//! Each target field is resolved on its own, in registry order, from the
//! original source item and the effective context. Delegated fields recurse
//! into the nested mapper with the parent's effective context as their
//! ambient context; nothing on the nested mapper is mutated.
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use super::core::Mapper;
use crate::context::Context;
use crate::target::Target;
use crate::translator::{Delegation, FieldRule, Source};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

impl Mapper {
    /// Transform an item, or every element of an array
    ///
    /// An array input yields an array of the same length and order.
    pub fn transform(&self, data: &Value) -> Result<Value> {
        self.transform_with_context(data, &Context::new())
    }

    /// Transform with an ambient context
    ///
    /// Rules see `ambient` overlaid with this mapper's own context, own
    /// entries winning on conflicting keys.
    pub fn transform_with_context(&self, data: &Value, ambient: &Context) -> Result<Value> {
        let context = ambient.overlay(&self.context);
        self.transform_in(data, &context, self.target.as_ref())
    }

    /// Transform exactly one item
    pub fn transform_item(&self, item: &Value) -> Result<Value> {
        let context = self.context.clone();
        self.transform_one(item, &context, self.target.as_ref())
    }

    /// Transform a slice of items
    pub fn transform_all(&self, items: &[Value]) -> Result<Vec<Value>> {
        let context = self.context.clone();
        items
            .iter()
            .map(|item| self.transform_one(item, &context, self.target.as_ref()))
            .collect()
    }

    /// Transform a typed model into a typed DTO
    ///
    /// `S` and `D` may also be `Vec`s, in which case the array rules apply.
    pub fn transform_into<S, D>(&self, source: &S) -> Result<D>
    where
        S: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let value = serde_json::to_value(source)?;
        let transformed = self.transform(&value)?;
        Ok(serde_json::from_value(transformed)?)
    }

    /// Transform a slice of typed models into typed DTOs
    pub fn transform_vec_into<S, D>(&self, sources: &[S]) -> Result<Vec<D>>
    where
        S: Serialize,
        D: DeserializeOwned,
    {
        let items = sources
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.transform_all(&items)?
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(Error::from))
            .collect()
    }

    /// Dispatch between the item and array forms with an already effective context
    pub(crate) fn transform_in(&self, data: &Value, context: &Context, target: Option<&Target>) -> Result<Value> {
        match data {
            Value::Array(items) => {
                log::trace!("Transforming {} items", items.len());
                items
                    .iter()
                    .map(|item| self.transform_one(item, context, target))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array)
            }
            item => self.transform_one(item, context, target),
        }
    }

    fn transform_one(&self, item: &Value, context: &Context, target: Option<&Target>) -> Result<Value> {
        let empty = Map::new();
        let fields = match item {
            Value::Object(fields) => fields,
            // A null item reads as an object without fields
            Value::Null => &empty,
            other => {
                return Err(Error::InvalidSource {
                    expected: "object".to_string(),
                    found: value_kind(other).to_string(),
                })
            }
        };
        let source = Source::new(fields);

        let mut output = Map::new();
        for (key, rule) in self.translator.iter() {
            match rule {
                FieldRule::Function(rule) => {
                    let value = rule(&source, context)?;
                    output.insert(key.to_string(), value);
                }
                FieldRule::Delegate(delegation) => {
                    if let Some(value) = self.delegate(key, delegation, &source, context)? {
                        output.insert(key.to_string(), value);
                    }
                }
            }
        }

        match target {
            Some(target) => target.build(output),
            None => Ok(Value::Object(output)),
        }
    }

    fn delegate(
        &self,
        key: &str,
        delegation: &Delegation,
        source: &Source<'_>,
        context: &Context,
    ) -> Result<Option<Value>> {
        let Some(sub_source) = source.get(&delegation.source_key) else {
            log::trace!("Skipping '{}': source field '{}' is absent", key, delegation.source_key);
            return Ok(None);
        };

        let nested = &delegation.mapper;
        let nested_context = context.overlay(&nested.context);
        let target = delegation.target.as_ref().or(nested.target.as_ref());
        nested.transform_in(sub_source, &nested_context, target).map(Some)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
