//! Conversion between JSON rows and structures

use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

use super::config::RowConfig;
use crate::collections::StructureCollection;
use crate::models::{Scalar, Structure};
use crate::validation::{ValidationError, ValidationResult, validate_attribute_name};

/// JSON type name used in conversion errors
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Converts rows shaped as JSON objects into structures and back
#[derive(Debug, Clone, Default)]
pub struct RowConverter {
    config: RowConfig,
}

impl RowConverter {
    /// Create a converter with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom configuration
    pub fn with_config(config: RowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RowConfig {
        &self.config
    }

    /// Convert one JSON attribute value into a scalar.
    pub fn scalar_from_json(&self, name: &str, value: Value) -> ValidationResult<Scalar> {
        match value {
            Value::Null => Ok(Scalar::Null),
            Value::Bool(b) => Ok(Scalar::Bool(b)),
            Value::String(s) => Ok(Scalar::String(s)),
            Value::Number(n) => self.scalar_from_number(name, &n),
            composite => Err(ValidationError::NonScalarValue {
                name: name.to_string(),
                found: json_type_name(&composite).to_string(),
            }),
        }
    }

    fn scalar_from_number(&self, name: &str, n: &Number) -> ValidationResult<Scalar> {
        if let Some(i) = n.as_i64() {
            return Ok(Scalar::Int(i));
        }
        if n.is_u64() {
            if !self.config.large_integers_as_float {
                return Err(ValidationError::NonScalarValue {
                    name: name.to_string(),
                    found: format!("integer out of range ({})", n),
                });
            }
            debug!("Widening out-of-range integer attribute '{}' to float", name);
        }
        n.as_f64()
            .map(Scalar::Float)
            .ok_or_else(|| ValidationError::NonScalarValue {
                name: name.to_string(),
                found: format!("unrepresentable number ({})", n),
            })
    }

    /// Convert a JSON object into a structure.
    ///
    /// The whole row is checked before the structure is built: any invalid name,
    /// composite value, or excess attribute count rejects the row.
    pub fn to_structure(&self, row: Value) -> ValidationResult<Structure> {
        let object = match row {
            Value::Object(object) => object,
            other => {
                return Err(ValidationError::NotAnObject(
                    json_type_name(&other).to_string(),
                ));
            }
        };

        let max = self.config.max_attributes;
        if max > 0 && object.len() > max {
            return Err(ValidationError::TooManyAttributes {
                max,
                actual: object.len(),
            });
        }

        let mut pairs = Vec::with_capacity(object.len());
        let mut dropped = 0usize;
        for (name, value) in object {
            validate_attribute_name(&name)?;
            let scalar = self.scalar_from_json(&name, value)?;
            if self.config.drop_nulls && scalar.is_null() {
                dropped += 1;
                continue;
            }
            pairs.push((name, scalar));
        }
        if dropped > 0 {
            debug!("Dropped {} null attributes from row", dropped);
        }

        Structure::new(pairs)
    }

    /// Convert a JSON array of objects into a collection.
    pub fn to_collection(&self, rows: Value) -> ValidationResult<StructureCollection> {
        let rows = match rows {
            Value::Array(rows) => rows,
            other => {
                return Err(ValidationError::NotAnObject(
                    json_type_name(&other).to_string(),
                ));
            }
        };

        let items = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                self.to_structure(row)
                    .map_err(|source| ValidationError::InvalidItem {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect::<ValidationResult<Vec<Structure>>>()
            .inspect_err(|e| warn!("Rejected row import: {}", e))?;

        Ok(StructureCollection::new(items))
    }

    /// Convert one scalar into a JSON value. Non-finite floats become `null`.
    pub fn scalar_to_json(&self, value: &Scalar) -> Value {
        match value {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Int(i) => Value::Number((*i).into()),
            Scalar::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Scalar::String(s) => Value::String(s.clone()),
        }
    }

    /// Convert a structure into a JSON object, in attribute order.
    pub fn to_json_object(&self, structure: &Structure) -> Map<String, Value> {
        structure
            .iter()
            .filter(|(_, value)| self.config.include_nulls_on_export || !value.is_null())
            .map(|(name, value)| (name.clone(), self.scalar_to_json(value)))
            .collect()
    }

    /// Convert a collection into a JSON array of objects.
    pub fn collection_to_json(&self, collection: &StructureCollection) -> Value {
        Value::Array(
            collection
                .iter()
                .map(|structure| Value::Object(self.to_json_object(structure)))
                .collect(),
        )
    }
}

impl Structure {
    /// Build a structure from a JSON object using the default row configuration.
    pub fn from_json(row: Value) -> ValidationResult<Self> {
        RowConverter::new().to_structure(row)
    }

    /// JSON object of the attributes, in insertion order.
    pub fn to_json_object(&self) -> Map<String, Value> {
        RowConverter::new().to_json_object(self)
    }
}

impl TryFrom<Value> for Structure {
    type Error = ValidationError;

    fn try_from(row: Value) -> Result<Self, Self::Error> {
        Structure::from_json(row)
    }
}

impl StructureCollection<Structure> {
    /// Build a collection from a JSON array of objects using the default row configuration.
    pub fn try_from_json_rows(rows: Value) -> ValidationResult<Self> {
        RowConverter::new().to_collection(rows)
    }

    /// JSON array of the records, in order.
    pub fn to_json_rows(&self) -> Value {
        RowConverter::new().collection_to_json(self)
    }
}
