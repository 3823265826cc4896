//! Models module for the SDK
//!
//! Defines the record types exchanged with a storage layer:
//! - [`Scalar`]: a single attribute value with strict and loose comparison
//! - [`Structure`]: an immutable record of named scalar attributes
//! - [`Record`]: the capability collections are generic over

pub mod record;
pub mod scalar;
pub mod structure;

pub use record::Record;
pub use scalar::Scalar;
pub use structure::Structure;
