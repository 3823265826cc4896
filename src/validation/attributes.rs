//! Attribute name and value validation.
//!
//! Every operation that introduces an attribute into a [`Structure`](crate::Structure)
//! goes through [`validate_attribute_name`] before anything is committed, so a
//! failed call never leaves a half-built record behind.
//!
//! # Name rules
//!
//! - Must not be empty
//! - Must start with an ASCII letter, an underscore, or a byte in `0x80..=0xFF`
//! - May continue with ASCII letters, digits, underscores, or bytes in `0x80..=0xFF`
//!
//! The pattern is evaluated over the UTF-8 bytes of the name, so any non-ASCII
//! character (all of its bytes are `>= 0x80`) is accepted as an identifier character.

use once_cell::sync::Lazy;
use regex::bytes::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a caller supplies an invalid attribute, value or item.
///
/// These are the recoverable, input-driven failures. Logic errors such as
/// asserting on an empty collection are reported through
/// [`CollectionError`](crate::collections::CollectionError) instead.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Attribute name does not match the identifier pattern
    #[error("Incorrect attribute name: '{0}'")]
    InvalidAttributeName(String),

    /// Attribute value is a composite (array or object) instead of a scalar
    #[error("Attribute '{name}' must hold a scalar or null, found {found}")]
    NonScalarValue { name: String, found: String },

    /// Attribute was required to exist but does not
    #[error("Attribute '{0}' does not exist in structure")]
    MissingAttribute(String),

    /// A raw row was not a key/value object
    #[error("Expected an object of attributes, found {0}")]
    NotAnObject(String),

    /// A raw row carries more attributes than allowed
    #[error("Row exceeds maximum attribute count (max: {max}, got: {actual})")]
    TooManyAttributes { max: usize, actual: usize },

    /// One item of a batch failed validation; the whole batch is rejected
    #[error("Item at index {index} is invalid: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

static ATTRIBUTE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)^[a-zA-Z_\x80-\xff][a-zA-Z0-9_\x80-\xff]*$").unwrap()
});

/// Check whether `name` is a valid attribute name without building an error.
pub fn is_valid_attribute_name(name: &str) -> bool {
    ATTRIBUTE_NAME_REGEX.is_match(name.as_bytes())
}

/// Validate an attribute name.
///
/// # Examples
///
/// ```
/// use structure_sdk::validation::validate_attribute_name;
///
/// assert!(validate_attribute_name("var1").is_ok());
/// assert!(validate_attribute_name("_private").is_ok());
/// assert!(validate_attribute_name("größe").is_ok());
/// assert!(validate_attribute_name("").is_err());
/// assert!(validate_attribute_name("1var").is_err());
/// assert!(validate_attribute_name("!var1").is_err());
/// ```
pub fn validate_attribute_name(name: &str) -> ValidationResult<()> {
    if is_valid_attribute_name(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAttributeName(name.to_string()))
    }
}

/// Validate every name of a batch, reporting the first offender.
pub fn validate_attribute_names<'a, I>(names: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().try_for_each(validate_attribute_name)
}
