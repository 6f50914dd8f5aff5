use serde_json::{Value, json};

use crate::domain::{Field, SchemaFragment};
use crate::schema::{CandidateValidator, GrammarError, TypeGrammar, is_invalid};

fn check(raw: Value) -> Result<SchemaFragment, GrammarError> {
    TypeGrammar::shared().check_document(&raw)
}

#[test]
fn accepts_every_primitive() {
    for name in crate::domain::PRIMITIVE_TYPES {
        assert!(check(json!(name)).is_ok(), "{name}");
    }
}

#[test]
fn accepts_nested_documents() {
    let fragment = check(json!({
        "type": "record",
        "name": "com.example.Order",
        "fields": [
            {"name": "id", "type": "string"},
            {"name": "lines", "type": {
                "type": "array",
                "items": {
                    "type": "record",
                    "name": "Line",
                    "fields": [{"name": "qty", "type": ["int", "null"]}]
                }
            }},
            {"name": "meta", "type": {"type": "map", "keys": "string", "values": "long"}}
        ]
    }))
    .unwrap();
    assert_eq!(fragment.record_name(), Some("com.example.Order"));
}

#[test]
fn rejects_unknown_primitive_names() {
    let err = check(json!("not-a-real-type")).unwrap_err();
    assert!(matches!(err, GrammarError::Shape(_)), "{err:?}");
    assert!(!err.to_string().is_empty());
}

#[test]
fn rejects_incomplete_complex_types() {
    assert!(check(json!({"type": "enum", "symbols": []})).is_err());
    assert!(check(json!({"type": "map", "keys": "string"})).is_err());
    assert!(check(json!({"type": "record", "name": "", "fields": []})).is_err());
}

#[test]
fn enum_symbols_must_be_names() {
    let err = check(json!({"type": "enum", "symbols": ["OK", "1st"]})).unwrap_err();
    assert_eq!(err, GrammarError::InvalidName("1st".to_string()));
}

#[test]
fn field_names_must_be_unique() {
    let candidate = SchemaFragment::record(
        "a1",
        vec![
            Field::new("id", SchemaFragment::primitive("int")),
            Field::new("id", SchemaFragment::primitive("long")),
        ],
    );
    let err = TypeGrammar::shared().check(&candidate).unwrap_err();
    assert_eq!(
        err,
        GrammarError::DuplicateField {
            record: "a1".to_string(),
            field: "id".to_string()
        }
    );
}

#[test]
fn record_names_must_be_unique_across_the_tree() {
    let inner = SchemaFragment::record("Same", vec![]);
    let outer = SchemaFragment::record("Same", vec![Field::new("child", inner)]);
    assert_eq!(
        TypeGrammar::shared().check(&outer).unwrap_err(),
        GrammarError::DuplicateRecord("Same".to_string())
    );
}

#[test]
fn union_members_are_unique() {
    assert!(check(json!(["string", "string"])).is_err());
    let err = check(json!([
        {"type": "array", "items": "int"},
        {"type": "array", "items": "long"}
    ]))
    .unwrap_err();
    assert_eq!(err, GrammarError::DuplicateUnionMember("array".to_string()));
    assert!(check(json!(["string", "int"])).is_ok());
}

#[test]
fn unions_only_nest_the_nullable_form() {
    assert!(check(json!(["string", ["int", "null"]])).is_ok());
    assert_eq!(
        check(json!(["string", ["int", "long"]])).unwrap_err(),
        GrammarError::NestedUnion
    );
}

#[test]
fn is_invalid_is_empty_for_valid_documents() {
    assert_eq!(is_invalid(&json!({"type": "array", "items": "int"})), "");
    assert!(!is_invalid(&json!({"type": "array"})).is_empty());
}

#[test]
fn validator_messages_match_grammar_errors() {
    let grammar = TypeGrammar::shared();
    let candidate = SchemaFragment::array(SchemaFragment::primitive("nope"));
    let message = grammar.validate(&candidate).unwrap_err();
    assert_eq!(message, grammar.check(&candidate).unwrap_err().to_string());
}

#[test]
fn closures_are_validators() {
    let only_arrays = |candidate: &SchemaFragment| match candidate {
        SchemaFragment::Array { .. } => Ok(()),
        _ => Err("arrays only".to_string()),
    };
    assert!(
        only_arrays
            .validate(&SchemaFragment::array(SchemaFragment::primitive("int")))
            .is_ok()
    );
    assert_eq!(
        only_arrays.validate(&SchemaFragment::primitive("int")),
        Err("arrays only".to_string())
    );
}
