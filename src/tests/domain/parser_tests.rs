use serde_json::json;

use crate::domain::{RowSeed, SchemaFragment, parse_fields, parse_type};

#[test]
fn parse_type_strips_the_nullable_wrapper() {
    let parsed = parse_type(&SchemaFragment::primitive("long").nullable());
    assert_eq!(parsed.display_type, "long");
    assert!(parsed.nullable);
    assert_eq!(parsed.fragment, SchemaFragment::primitive("long"));
    assert_eq!(
        parsed.to_fragment(),
        SchemaFragment::primitive("long").nullable()
    );
}

#[test]
fn parse_type_remembers_a_leading_null() {
    let fragment = SchemaFragment::try_from(json!(["null", "string"])).unwrap();
    let parsed = parse_type(&fragment);
    assert!(parsed.nullable);
    assert!(parsed.null_first);
    assert_eq!(parsed.to_fragment(), fragment);

    assert!(!parse_type(&SchemaFragment::primitive("long").nullable()).null_first);
}

#[test]
fn parse_type_names_complex_payloads() {
    let array = SchemaFragment::array(SchemaFragment::primitive("int"));
    let parsed = parse_type(&array);
    assert_eq!(parsed.display_type, "array");
    assert!(!parsed.nullable);
    assert_eq!(parsed.fragment, array);

    let union = SchemaFragment::try_from(json!(["int", "string"])).unwrap();
    assert_eq!(parse_type(&union).display_type, "union");
}

#[test]
fn parse_fields_decomposes_each_field() {
    let record = SchemaFragment::try_from(json!({
        "type": "record",
        "name": "User",
        "fields": [
            {"name": "id", "type": "long"},
            {"name": "email", "type": ["null", "string"]}
        ]
    }))
    .unwrap();
    let fields = parse_fields(&record);
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].0, "id");
    assert_eq!(fields[1].1.display_type, "string");
    assert!(fields[1].1.nullable);

    assert!(parse_fields(&SchemaFragment::primitive("int")).is_empty());
}

#[test]
fn seeds_resolve_to_fragments() {
    let fragment = SchemaFragment::primitive("int");
    assert_eq!(
        RowSeed::from(&fragment).resolve().as_deref(),
        Some(&fragment)
    );

    let raw = json!({"type": "array", "items": "bytes"});
    assert_eq!(
        RowSeed::from(&raw).resolve().as_deref(),
        Some(&SchemaFragment::array(SchemaFragment::primitive("bytes")))
    );

    let broken = json!({"type": "array"});
    assert!(RowSeed::from(&broken).resolve().is_none());
    assert!(RowSeed::Name("record").resolve().is_none());
    assert!(RowSeed::Default.resolve().is_none());
}
