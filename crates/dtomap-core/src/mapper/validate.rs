//! Transform followed by validation of the results
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use super::core::Mapper;
use crate::context::Context;
use crate::error::TransformationError;
use crate::validation::ValidationOptions;
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

impl Mapper {
    /// Transform `data` and validate the result
    ///
    /// A single item fails with every failure the validator reported. For an
    /// array, elements are validated in order and the first element with any
    /// failure aborts the call, reporting its position and its failures only.
    /// Without a validator every result is valid.
    pub fn transform_and_validate(&self, data: &Value, options: Option<&ValidationOptions>) -> Result<Value> {
        self.transform_and_validate_with_context(data, &Context::new(), options)
    }

    /// [`Mapper::transform_and_validate`] with an ambient context
    pub fn transform_and_validate_with_context(
        &self,
        data: &Value,
        ambient: &Context,
        options: Option<&ValidationOptions>,
    ) -> Result<Value> {
        let transformed = self.transform_with_context(data, ambient)?;
        let defaults = ValidationOptions::default();
        self.validate_result(&transformed, options.unwrap_or(&defaults))?;
        Ok(transformed)
    }

    /// Typed variant of [`Mapper::transform_and_validate`]
    pub fn transform_and_validate_into<S, D>(&self, source: &S, options: Option<&ValidationOptions>) -> Result<D>
    where
        S: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let value = serde_json::to_value(source)?;
        let validated = self.transform_and_validate(&value, options)?;
        Ok(serde_json::from_value(validated)?)
    }

    fn validate_result(&self, value: &Value, options: &ValidationOptions) -> std::result::Result<(), TransformationError> {
        let Some(validator) = &self.validator else {
            return Ok(());
        };

        match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let failures = validator.validate(item, options);
                    if !failures.is_empty() {
                        log::debug!("Validation failed at position {} with {} failure(s)", index, failures.len());
                        return Err(TransformationError::at_position(index, failures));
                    }
                }
            }
            item => {
                let failures = validator.validate(item, options);
                if !failures.is_empty() {
                    log::debug!("Validation failed with {} failure(s)", failures.len());
                    return Err(TransformationError::for_item(failures));
                }
            }
        }
        Ok(())
    }
}
