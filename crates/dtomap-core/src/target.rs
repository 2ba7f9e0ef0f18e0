//! Typed result construction
//!
//! A [`Target`] turns the plain object assembled by a mapper into the value
//! the caller actually wants. It is supplied when the mapper is built; the
//! engine only calls it and never inspects the type behind it.
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Factory turning an assembled plain object into the final value
pub type BuildFunction = Arc<dyn Fn(Map<String, Value>) -> Result<Value> + Send + Sync>;

/// Named result factory attached to a mapper or a delegation rule
#[derive(Clone)]
pub struct Target {
    name: String,
    build: BuildFunction,
}

impl Target {
    /// Create a target from an arbitrary factory
    pub fn new<F>(name: impl Into<String>, build: F) -> Self
    where
        F: Fn(Map<String, Value>) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            build: Arc::new(build),
        }
    }

    /// Target that round-trips the plain object through `T`
    ///
    /// The object is deserialized into `T` and serialized back, so serde
    /// defaults, renames, skipped fields and custom `Serialize` output of `T`
    /// all show up in the result. A shape `T` rejects fails with [`Error::Build`].
    pub fn typed<T>() -> Self
    where
        T: DeserializeOwned + Serialize + 'static,
    {
        let name = std::any::type_name::<T>().to_string();
        let target_name = name.clone();
        Self::new(name, move |plain| {
            let typed: T = serde_json::from_value(Value::Object(plain)).map_err(|e| Error::Build {
                target: target_name.clone(),
                message: e.to_string(),
                source: Some(e),
            })?;
            Ok(serde_json::to_value(&typed)?)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the final value from an assembled plain object
    pub fn build(&self, plain: Map<String, Value>) -> Result<Value> {
        (self.build)(plain)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target").field("name", &self.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct AddressDto {
        address: String,
        #[serde(default)]
        verified: bool,
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_typed_target_applies_defaults() {
        let target = Target::typed::<AddressDto>();
        let built = target.build(object(json!({"address": "KR 44A"}))).unwrap();
        assert_eq!(built, json!({"address": "KR 44A", "verified": false}));
        assert!(target.name().ends_with("AddressDto"));
    }

    #[test]
    fn test_typed_target_rejects_wrong_shape() {
        let target = Target::typed::<AddressDto>();
        let err = target.build(object(json!({"address": 42}))).unwrap_err();
        match err {
            Error::Build { target, source, .. } => {
                assert!(target.ends_with("AddressDto"));
                assert!(source.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_target() {
        let target = Target::new("Tagged", |mut plain| {
            plain.insert("kind".to_string(), json!("tagged"));
            Ok(Value::Object(plain))
        });
        let built = target.build(object(json!({"id": 1}))).unwrap();
        assert_eq!(built, json!({"id": 1, "kind": "tagged"}));
        assert_eq!(format!("{:?}", target), "Target { name: \"Tagged\", .. }");
    }
}
