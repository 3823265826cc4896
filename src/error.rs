//! Crate-level error type
//!
//! Wraps the two error kinds so pipelines mixing validated updates and
//! collection assertions can use `?` throughout, while callers can still tell
//! bad input apart from a broken precondition.

use thiserror::Error;

use crate::collections::CollectionError;
use crate::validation::ValidationError;

/// Any error produced by this crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructureError {
    /// Caller supplied invalid input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A collection precondition did not hold
    #[error(transparent)]
    Assertion(#[from] CollectionError),
}

impl StructureError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StructureError::Validation(_))
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, StructureError::Assertion(_))
    }
}
