use serde_json::json;

use crate::domain::{ComplexKind, Field, SchemaFragment};
use crate::schema::GrammarError;

#[test]
fn primitives_serialize_as_bare_strings() {
    assert_eq!(SchemaFragment::primitive("long").to_value(), json!("long"));
    assert_eq!(SchemaFragment::null().to_value(), json!("null"));
}

#[test]
fn complex_types_put_type_first() {
    let record = SchemaFragment::record(
        "a1",
        vec![Field::new("id", SchemaFragment::primitive("int"))],
    );
    let rendered = serde_json::to_string(&record).unwrap();
    assert!(rendered.starts_with(r#"{"type":"record""#), "{rendered}");

    let map = SchemaFragment::map(
        SchemaFragment::primitive("string"),
        SchemaFragment::primitive("long"),
    );
    assert_eq!(
        map.to_string(),
        r#"{"type":"map","keys":"string","values":"long"}"#
    );
}

#[test]
fn unions_serialize_as_member_arrays() {
    let union = SchemaFragment::primitive("int").nullable();
    assert_eq!(union.to_value(), json!(["int", "null"]));
}

#[test]
fn nullable_detection_accepts_null_in_either_position() {
    let trailing = SchemaFragment::try_from(json!(["int", "null"])).unwrap();
    let leading = SchemaFragment::try_from(json!(["null", "int"])).unwrap();
    for fragment in [&trailing, &leading] {
        let (inner, nullable) = fragment.split_nullable();
        assert!(nullable);
        assert_eq!(inner, &SchemaFragment::primitive("int"));
    }

    let three = SchemaFragment::try_from(json!(["int", "string", "null"])).unwrap();
    assert!(!three.split_nullable().1);
    let both_null = SchemaFragment::try_from(json!(["null", "null"])).unwrap();
    assert!(!both_null.split_nullable().1);
}

#[test]
fn decoding_accepts_wrapped_primitives_and_keyless_maps() {
    assert_eq!(
        SchemaFragment::try_from(json!({"type": "boolean"})).unwrap(),
        SchemaFragment::primitive("boolean")
    );
    assert_eq!(
        SchemaFragment::try_from(json!({"type": ["int", "null"]})).unwrap(),
        SchemaFragment::primitive("int").nullable()
    );
    let map = SchemaFragment::try_from(json!({"type": "map", "values": "bytes"})).unwrap();
    assert_eq!(map.keys_type(), Some(&SchemaFragment::primitive("string")));
    assert_eq!(map.values_type(), Some(&SchemaFragment::primitive("bytes")));
}

#[test]
fn decoding_reports_missing_members() {
    let err = SchemaFragment::try_from(json!({"type": "array"})).unwrap_err();
    assert_eq!(
        err,
        GrammarError::Malformed("array type is missing \"items\"".to_string())
    );
    assert!(SchemaFragment::try_from(json!(42)).is_err());
    assert!(SchemaFragment::try_from(json!({"type": "union"})).is_err());
}

#[test]
fn unknown_type_names_survive_decoding() {
    let fragment = SchemaFragment::try_from(json!("not-a-real-type")).unwrap();
    assert_eq!(fragment.type_name(), "not-a-real-type");
    assert_eq!(fragment.kind(), None);
}

#[test]
fn accessors_follow_the_variant() {
    let fragment = SchemaFragment::try_from(json!({
        "type": "record",
        "name": "Point",
        "fields": [
            {"name": "x", "type": "double"},
            {"name": "tags", "type": {"type": "array", "items": "string"}}
        ]
    }))
    .unwrap();
    assert_eq!(fragment.kind(), Some(ComplexKind::Record));
    assert_eq!(fragment.record_name(), Some("Point"));
    let fields = fragment.fields().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(
        fields[1].ty.items_type(),
        Some(&SchemaFragment::primitive("string"))
    );
    assert!(fragment.symbols().is_none());
    assert!(fragment.variants().is_none());
}

#[test]
fn serde_round_trips_through_value() {
    let raw = json!({
        "type": "enum",
        "symbols": ["RED", "GREEN"]
    });
    let fragment: SchemaFragment = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(
        fragment.symbols().map(<[String]>::to_vec),
        Some(vec!["RED".to_string(), "GREEN".to_string()])
    );
    assert_eq!(serde_json::to_value(&fragment).unwrap(), raw);
}
