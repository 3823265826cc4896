//! Structure SDK - Immutable records of named scalar attributes
//!
//! Provides unified types for:
//! - Flat records (`Structure`) with validated attribute names
//! - Strict and loose (type-coercing) comparison of records
//! - Attribute projection and copy-on-write updates
//! - Ordered, immutable collections of records
//! - Row conversion at the storage boundary

pub mod collections;
pub mod error;
pub mod models;
pub mod rows;
pub mod validation;

// Re-export commonly used types
pub use collections::{CollectionError, CollectionResult, StructureCollection};
pub use error::StructureError;
pub use models::{Record, Scalar, Structure};
pub use rows::{RowConfig, RowConverter};
pub use validation::{ValidationError, ValidationResult};
