//! Validation functionality
//!
//! Provides validation logic for:
//! - Attribute names (identifier pattern)
//! - The validation error kind shared by records, collections and row conversion

pub mod attributes;

pub use attributes::{
    ValidationError, ValidationResult, is_valid_attribute_name, validate_attribute_name,
    validate_attribute_names,
};
