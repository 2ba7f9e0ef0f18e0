//! Mapping engine
//!
//! This module contains the [`Mapper`], which owns a translator registry and
//! turns source models (or arrays of them) into DTOs.
//!
//! - [`core`] - The mapper struct and rule registration
//! - [`transform`] - The recursive transform algorithm and typed helpers
//! - [`validate`] - Transform followed by validation
//! - [`builder`] - Fluent builder API
//!
//! # Nested mappers
//!
//! ```
//! use dtomap_core::{Context, Mapper};
//! use serde_json::json;
//!
//! let mut address = Mapper::new();
//! address.add_mapping("address", |src, _| {
//!     Ok(json!(format!(
//!         "{}, {}, {}",
//!         src.get_str("address").unwrap_or(""),
//!         src.get_str("city").unwrap_or(""),
//!         src.get_str("country").unwrap_or("")
//!     )))
//! });
//!
//! let mut user = Mapper::new();
//! user.add_mapper("address", "address", address);
//!
//! let dto = user
//!     .transform(&json!({"address": {"address": "KR 44A # 24D-21", "city": "Bogota", "country": "Colombia"}}))
//!     .unwrap();
//! assert_eq!(dto["address"]["address"], "KR 44A # 24D-21, Bogota, Colombia");
//! ```
//!
//! Copyright (c) 2025 Dtomap Team
//! Licensed under the Apache-2.0 license

pub mod core;
pub mod transform;
pub mod validate;
pub mod builder;


pub use self::core::Mapper;
pub use builder::MapperBuilder;
