//! Row conversion at the storage boundary
//!
//! A storage layer hands rows over as key/value mappings and expects the same
//! shape back when writing. This module converts JSON rows into
//! [`Structure`](crate::Structure) values and collections, and back again.
//!
//! ## Features
//!
//! - **Validated import** - names and values are checked before a row is built
//! - **Batch import** - an array of rows imports atomically or not at all
//! - **Ordered export** - attributes are written back in insertion order
//! - **Null handling** - nulls can be dropped on import or omitted on export
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use structure_sdk::rows::{RowConfig, RowConverter};
//!
//! let converter = RowConverter::with_config(RowConfig::builder().drop_nulls(true).build());
//! let row = converter.to_structure(json!({"id": 7, "note": null}))?;
//!
//! assert_eq!(row.attributes(), vec!["id"]);
//! assert_eq!(converter.to_json_object(&row), json!({"id": 7}).as_object().unwrap().clone());
//! # Ok::<(), structure_sdk::ValidationError>(())
//! ```

mod config;
mod converter;

pub use config::{RowConfig, RowConfigBuilder};
pub use converter::RowConverter;
