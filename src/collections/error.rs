//! Error types for collection assertions

use thiserror::Error;

/// A precondition the caller asserted on a collection did not hold.
///
/// Unlike [`ValidationError`](crate::validation::ValidationError) this never
/// comes from bad input; it means the calling code's expectation about the
/// collection was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An asserted accessor was called on an empty collection
    #[error("Assertion failed: {operation} called on an empty collection")]
    Empty { operation: &'static str },

    /// The count predicate passed to `assert_count` returned false
    #[error("Assertion failed: collection count {count} rejected by predicate")]
    CountRejected { count: usize },
}

/// Result type for asserted collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;
