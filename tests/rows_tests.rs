//! Tests for row conversion at the storage boundary

use serde_json::{Value, json};
use structure_sdk::{RowConfig, RowConverter, Scalar, Structure, StructureCollection, ValidationError};

mod import_tests {
    use super::*;

    #[test]
    fn test_from_json_object() {
        let row = Structure::from_json(json!({"var1": "someStr", "var2": 12})).unwrap();
        assert_eq!(row.get("var1"), Scalar::from("someStr"));
        assert_eq!(row.get("var2"), Scalar::Int(12));
        assert_eq!(row.attributes(), vec!["var1", "var2"]);
    }

    #[test]
    fn test_try_from_value() {
        let row = Structure::try_from(json!({"flag": true, "ratio": 0.5, "note": null})).unwrap();
        assert_eq!(row.get("flag"), Scalar::Bool(true));
        assert_eq!(row.get("ratio"), Scalar::Float(0.5));
        assert!(row.has("note"));
    }

    #[test]
    fn test_invalid_name_rejected() {
        assert_eq!(
            Structure::from_json(json!({"!var1": "someStr"})),
            Err(ValidationError::InvalidAttributeName("!var1".to_string()))
        );
    }

    #[test]
    fn test_list_rejected() {
        assert_eq!(
            Structure::from_json(json!(["val1", "val2"])),
            Err(ValidationError::NotAnObject("array".to_string()))
        );
        assert!(matches!(
            Structure::from_json(json!("text")),
            Err(ValidationError::NotAnObject(_))
        ));
    }

    #[test]
    fn test_nested_values_rejected() {
        assert_eq!(
            Structure::from_json(json!({"var1": "ok", "var2": {"inner": 1}})),
            Err(ValidationError::NonScalarValue {
                name: "var2".to_string(),
                found: "object".to_string()
            })
        );
        assert!(matches!(
            Structure::from_json(json!({"var1": [1, 2]})),
            Err(ValidationError::NonScalarValue { .. })
        ));
    }

    #[test]
    fn test_drop_nulls() {
        let converter = RowConverter::with_config(RowConfig::builder().drop_nulls(true).build());
        let row = converter.to_structure(json!({"a": 1, "b": null, "c": ""})).unwrap();
        assert_eq!(row.attributes(), vec!["a", "c"]);
    }

    #[test]
    fn test_max_attributes() {
        let converter = RowConverter::with_config(RowConfig::builder().max_attributes(2).build());
        assert!(converter.to_structure(json!({"a": 1, "b": 2})).is_ok());
        assert_eq!(
            converter.to_structure(json!({"a": 1, "b": 2, "c": 3})),
            Err(ValidationError::TooManyAttributes { max: 2, actual: 3 })
        );
    }
}

mod export_tests {
    use super::*;

    #[test]
    fn test_to_json_object_keeps_order() {
        let row = Structure::new([("zeta", Scalar::Int(1)), ("alpha", Scalar::from("x"))]).unwrap();
        let object = row.to_json_object();
        let keys: Vec<&String> = object.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(Value::Object(object), json!({"zeta": 1, "alpha": "x"}));
    }

    #[test]
    fn test_omit_nulls_on_export() {
        let row = Structure::new([("a", Scalar::Int(1)), ("b", Scalar::Null)]).unwrap();
        let converter =
            RowConverter::with_config(RowConfig::builder().include_nulls_on_export(false).build());
        assert_eq!(Value::Object(converter.to_json_object(&row)), json!({"a": 1}));
        assert_eq!(Value::Object(row.to_json_object()), json!({"a": 1, "b": null}));
    }

    #[test]
    fn test_json_round_trip_preserves_types() {
        let original = json!({"s": "12", "i": 12, "f": 1.5, "b": false, "n": null});
        let row = Structure::from_json(original.clone()).unwrap();
        assert!(!row.is_strictly_equals(&row.with("s", 12).unwrap()));
        assert_eq!(Value::Object(row.to_json_object()), original);
    }
}

mod collection_rows_tests {
    use super::*;

    #[test]
    fn test_collection_from_json_rows() {
        let collection = StructureCollection::try_from_json_rows(json!([
            {"name": "Valerua"},
            {"name": "Jones"}
        ]))
        .unwrap();
        assert_eq!(collection.count(), 2);
        assert_eq!(
            collection.to_json_rows(),
            json!([{"name": "Valerua"}, {"name": "Jones"}])
        );
    }

    #[test]
    fn test_collection_from_json_rows_reports_index() {
        let err = StructureCollection::try_from_json_rows(json!([
            {"name": "Valerua"},
            {"name": "Jones"},
            {"!name": "Clementine"}
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidItem {
                index: 2,
                source: Box::new(ValidationError::InvalidAttributeName("!name".to_string())),
            }
        );
    }

    #[test]
    fn test_collection_from_non_array() {
        assert!(matches!(
            StructureCollection::try_from_json_rows(json!({"name": "Valerua"})),
            Err(ValidationError::NotAnObject(_))
        ));
    }
}
