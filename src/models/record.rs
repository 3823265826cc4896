//! Record capability shared by everything a collection can hold

use super::Scalar;

/// A flat record whose attributes can be read by name and compared.
///
/// [`StructureCollection`](crate::collections::StructureCollection) is generic over
/// this trait rather than over [`Structure`](super::Structure), so any row type
/// that can answer these four questions can be collected, filtered and deduplicated.
pub trait Record: Clone {
    /// Value of `name`, or [`Scalar::Null`] when the attribute is absent.
    fn get(&self, name: &str) -> Scalar;

    /// Whether `name` is a declared attribute (even when it holds null).
    fn has(&self, name: &str) -> bool;

    /// Same attributes with strictly equal values on both sides.
    fn is_strictly_equals(&self, other: &Self) -> bool;

    /// Same attributes with loosely equal values on both sides.
    fn is_rude_equals(&self, other: &Self) -> bool;
}
