//! Structure model
//!
//! A [`Structure`] is an immutable, insertion-ordered record of named scalar
//! attributes: the in-memory shape of one row read from, or written to, a
//! storage table. Every "mutating" operation returns a new value and leaves the
//! receiver untouched.
//!
//! ```
//! use structure_sdk::{Scalar, Structure};
//!
//! let row = Structure::new([("var1", Scalar::from("x")), ("var2", Scalar::Int(12))])?;
//! let updated = row.with("var2", 299)?.without("var1")?;
//!
//! assert_eq!(updated.get("var2"), Scalar::Int(299));
//! assert!(!updated.has("var1"));
//! assert!(row.has("var1"));
//! # Ok::<(), structure_sdk::ValidationError>(())
//! ```

use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};

use super::{Record, Scalar};
use crate::validation::{ValidationError, ValidationResult, validate_attribute_name};

/// Immutable record of named scalar attributes.
///
/// `==` is strict equality over the attribute set and is insensitive to
/// attribute order; use [`Structure::is_rude_equals`] for loose comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, Scalar>",
    into = "IndexMap<String, Scalar>"
)]
pub struct Structure {
    fields: IndexMap<String, Scalar>,
}

impl Structure {
    /// Build a structure from `(name, value)` pairs.
    ///
    /// Fails without building anything if any name is not a valid attribute
    /// name. A repeated name keeps its first position and its last value.
    pub fn new<I, K, V>(attributes: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        let mut fields = IndexMap::new();
        for (name, value) in attributes {
            let name = name.into();
            validate_attribute_name(&name)?;
            fields.insert(name, value.into());
        }
        Ok(Self { fields })
    }

    /// Build a structure from an already assembled attribute map.
    pub fn from_map(fields: IndexMap<String, Scalar>) -> ValidationResult<Self> {
        for name in fields.keys() {
            validate_attribute_name(name)?;
        }
        Ok(Self { fields })
    }

    /// Structure with no attributes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Value of `name`, or [`Scalar::Null`] when absent.
    ///
    /// Absence and a stored null read the same here; use [`Structure::has`] to
    /// tell them apart.
    pub fn get(&self, name: &str) -> Scalar {
        self.fields.get(name).cloned().unwrap_or(Scalar::Null)
    }

    /// Borrow the stored value of `name`, if declared.
    pub fn value(&self, name: &str) -> Option<&Scalar> {
        self.fields.get(name)
    }

    /// Whether `name` is a declared attribute, even if it holds null.
    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Declared and not null.
    pub fn has_value(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|value| !value.is_null())
    }

    /// Declared and truthy: `has(name) && value_is_truthy(value)`.
    pub fn is_set(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(Scalar::is_truthy)
    }

    /// Absent, or holding a falsy value (`null`, `false`, `0`, `0.0`, `""`, `"0"`).
    pub fn is_empty(&self, name: &str) -> bool {
        !self.fields.get(name).is_some_and(Scalar::is_truthy)
    }

    /// Copy of this structure with `name` set to `value`.
    ///
    /// An existing attribute keeps its position; a new one is appended.
    pub fn with(&self, name: &str, value: impl Into<Scalar>) -> ValidationResult<Self> {
        validate_attribute_name(name)?;
        let mut fields = self.fields.clone();
        fields.insert(name.to_string(), value.into());
        Ok(Self { fields })
    }

    /// Copy of this structure without `name`. Removing an absent attribute fails.
    pub fn without(&self, name: &str) -> ValidationResult<Self> {
        validate_attribute_name(name)?;
        if !self.has(name) {
            return Err(ValidationError::MissingAttribute(name.to_string()));
        }
        let mut fields = self.fields.clone();
        fields.shift_remove(name);
        Ok(Self { fields })
    }

    /// Projection onto `names`. Names that are not declared are ignored.
    pub fn with_only<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: Vec<S> = names.into_iter().collect();
        let fields = self
            .fields
            .iter()
            .filter(|(key, _)| wanted.iter().any(|name| name.as_ref() == key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self { fields }
    }

    /// Projection onto `names`, failing if any of them is not declared.
    pub fn get_only<I, S>(&self, names: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        if let Some(missing) = names.iter().find(|name| !self.has(name.as_ref())) {
            return Err(ValidationError::MissingAttribute(missing.as_ref().to_string()));
        }
        Ok(self.with_only(names))
    }

    /// Declared attribute names in insertion order.
    pub fn attributes(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Number of declared attributes.
    pub fn attribute_count(&self) -> usize {
        self.fields.len()
    }

    /// Independent copy of the attribute map.
    pub fn to_map(&self) -> IndexMap<String, Scalar> {
        self.fields.clone()
    }

    pub fn into_map(self) -> IndexMap<String, Scalar> {
        self.fields
    }

    /// Apply `f(value, name)` to every attribute, keeping names and order.
    pub fn map<T, F>(&self, mut f: F) -> IndexMap<String, T>
    where
        F: FnMut(&Scalar, &str) -> T,
    {
        self.fields
            .iter()
            .map(|(key, value)| (key.clone(), f(value, key)))
            .collect()
    }

    pub fn iter(&self) -> Iter<'_, String, Scalar> {
        self.fields.iter()
    }

    /// Every attribute of `self` is declared in `other` with a strictly equal value.
    pub fn is_included_strictly_in(&self, other: &Structure) -> bool {
        self.fields
            .iter()
            .all(|(key, value)| other.value(key).is_some_and(|theirs| value.strict_eq(theirs)))
    }

    /// Every attribute of `self` is declared in `other` with a loosely equal value.
    pub fn is_included_rude_in(&self, other: &Structure) -> bool {
        self.fields
            .iter()
            .all(|(key, value)| other.value(key).is_some_and(|theirs| value.loose_eq(theirs)))
    }

    /// Mutual strict inclusion.
    pub fn is_strictly_equals(&self, other: &Structure) -> bool {
        self.is_included_strictly_in(other) && other.is_included_strictly_in(self)
    }

    /// Mutual loose inclusion.
    pub fn is_rude_equals(&self, other: &Structure) -> bool {
        self.is_included_rude_in(other) && other.is_included_rude_in(self)
    }

    /// Same set of attribute names, regardless of values and order.
    pub fn is_attributes_equals(&self, other: &Structure) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields.keys().all(|key| other.has(key))
    }
}

impl Record for Structure {
    fn get(&self, name: &str) -> Scalar {
        Structure::get(self, name)
    }

    fn has(&self, name: &str) -> bool {
        Structure::has(self, name)
    }

    fn is_strictly_equals(&self, other: &Self) -> bool {
        Structure::is_strictly_equals(self, other)
    }

    fn is_rude_equals(&self, other: &Self) -> bool {
        Structure::is_rude_equals(self, other)
    }
}

impl TryFrom<IndexMap<String, Scalar>> for Structure {
    type Error = ValidationError;

    fn try_from(fields: IndexMap<String, Scalar>) -> Result<Self, Self::Error> {
        Structure::from_map(fields)
    }
}

impl From<Structure> for IndexMap<String, Scalar> {
    fn from(structure: Structure) -> Self {
        structure.fields
    }
}

impl<'a> IntoIterator for &'a Structure {
    type Item = (&'a String, &'a Scalar);
    type IntoIter = Iter<'a, String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Structure {
        Structure::new([("var1", Scalar::from("someStr")), ("var2", Scalar::from(12))]).unwrap()
    }

    #[test]
    fn test_basics() {
        let structure = sample();
        assert_eq!(structure.get("var1"), Scalar::from("someStr"));
        assert_eq!(structure.get("var2"), Scalar::Int(12));

        let extended = structure.with("a12", "var1af!").unwrap();
        assert_eq!(extended.get("a12"), Scalar::from("var1af!"));
        assert_eq!(extended.get("var1"), Scalar::from("someStr"));
        assert!(!structure.has("a12"));

        let overwritten = extended.with("var1", 299).unwrap();
        assert_eq!(overwritten.get("var1"), Scalar::Int(299));
        assert_eq!(overwritten.attributes(), vec!["var1", "var2", "a12"]);
    }

    #[test]
    fn test_without() {
        let structure = sample();
        assert!(structure.is_set("var2"));
        let removed = structure.without("var2").unwrap();
        assert!(!removed.is_set("var2"));
        assert!(!removed.has("var2"));
        assert_eq!(removed.get("var2"), Scalar::Null);
        assert!(structure.has("var2"));
    }

    #[test]
    fn test_without_errors() {
        let structure = sample();
        assert_eq!(
            structure.without("var3"),
            Err(ValidationError::MissingAttribute("var3".to_string()))
        );
        assert_eq!(
            structure.without("!31fc1"),
            Err(ValidationError::InvalidAttributeName("!31fc1".to_string()))
        );
    }

    #[test]
    fn test_construct_rejects_invalid_name() {
        let result = Structure::new([("!var1", "someStr")]);
        assert!(matches!(result, Err(ValidationError::InvalidAttributeName(_))));
        let result = Structure::new([("0", "val1"), ("1", "val2")]);
        assert!(matches!(result, Err(ValidationError::InvalidAttributeName(_))));
    }

    #[test]
    fn test_with_rejects_invalid_name() {
        assert!(matches!(
            sample().with("!1290", "valval"),
            Err(ValidationError::InvalidAttributeName(_))
        ));
    }

    #[test]
    fn test_null_attribute_is_declared_but_not_set() {
        let structure = sample().with("var3", Scalar::Null).unwrap();
        assert!(structure.has("var3"));
        assert!(!structure.has_value("var3"));
        assert!(!structure.is_set("var3"));
        assert!(structure.is_empty("var3"));
    }

    #[test]
    fn test_is_set_and_is_empty_follow_truthiness() {
        let structure = Structure::new([
            ("zero", Scalar::Int(0)),
            ("text_zero", Scalar::from("0")),
            ("blank", Scalar::from("")),
            ("off", Scalar::Bool(false)),
            ("name", Scalar::from("x")),
        ])
        .unwrap();
        for name in ["zero", "text_zero", "blank", "off", "missing"] {
            assert!(!structure.is_set(name), "{name}");
            assert!(structure.is_empty(name), "{name}");
        }
        assert!(structure.has_value("zero"));
        assert!(structure.is_set("name"));
        assert!(!structure.is_empty("name"));
    }

    #[test]
    fn test_repeated_name_keeps_last_value() {
        let structure = Structure::new([("a", 1), ("b", 2), ("a", 3)]).unwrap();
        assert_eq!(structure.attributes(), vec!["a", "b"]);
        assert_eq!(structure.get("a"), Scalar::Int(3));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Structure::new([("a", 1), ("b", 2)]).unwrap();
        let b = Structure::new([("b", 2), ("a", 1)]).unwrap();
        assert_eq!(a, b);
        assert!(a.is_strictly_equals(&b));
    }

    #[test]
    fn test_serde_validates_names() {
        let parsed: Structure = serde_json::from_str(r#"{"var1": "x", "var2": 12}"#).unwrap();
        assert_eq!(parsed, Structure::new([("var1", Scalar::from("x")), ("var2", Scalar::Int(12))]).unwrap());
        assert!(serde_json::from_str::<Structure>(r#"{"!var1": "x"}"#).is_err());
        assert!(serde_json::from_str::<Structure>(r#"{"var1": [1, 2]}"#).is_err());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"{"var1":"x","var2":12}"#);
    }
}
