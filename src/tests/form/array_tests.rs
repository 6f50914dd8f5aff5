use crate::domain::{ComplexKind, SchemaFragment};
use crate::form::{ArrayRow, RowEditor, RowError, RowEvent, SchemaRow};
use crate::schema::CandidateValidator;

use super::grammar;

fn array_of(name: &str) -> SchemaFragment {
    SchemaFragment::array(SchemaFragment::primitive(name))
}

#[test]
fn default_items_are_strings_and_emit_once_at_mount() {
    let g = grammar();
    let mut row = ArrayRow::default();
    assert_eq!(row.items().display_type(), "string");
    assert_eq!(row.settle(&*g), Some(array_of("string")));
    assert_eq!(row.settle(&*g), None);
}

#[test]
fn picking_a_primitive_emits_the_array() {
    let g = grammar();
    let mut row = ArrayRow::default();
    assert_eq!(row.set_item_type("double", &*g), Some(array_of("double")));
    assert_eq!(row.items().display_type(), "double");
    assert_eq!(row.error(), None);
}

#[test]
fn nullable_items_use_the_null_union() {
    let g = grammar();
    let mut row = ArrayRow::default();
    row.set_item_type("int", &*g);
    assert_eq!(
        row.set_nullable(true, &*g),
        Some(SchemaFragment::array(SchemaFragment::primitive("int").nullable()))
    );
    assert_eq!(
        row.set_item_type("long", &*g),
        Some(SchemaFragment::array(SchemaFragment::primitive("long").nullable()))
    );
    assert_eq!(row.set_nullable(false, &*g), Some(array_of("long")));
}

#[test]
fn rejected_type_keeps_state_and_reports_the_validator_message() {
    let g = grammar();
    let mut row = ArrayRow::default();
    let expected = g.validate(&array_of("not-a-real-type")).unwrap_err();

    assert_eq!(row.set_item_type("not-a-real-type", &*g), None);
    assert_eq!(row.error(), Some(expected.as_str()));
    assert_eq!(row.items().display_type(), "string");
    assert_eq!(row.items().parsed(), Some(&SchemaFragment::primitive("string")));

    row.set_item_type("int", &*g);
    assert_eq!(row.error(), None);
}

#[test]
fn complex_items_wait_for_the_nested_editor() {
    let g = grammar();
    let mut row = ArrayRow::default();
    row.settle(&*g);

    assert_eq!(row.set_item_type("enum", &*g), None);
    assert!(row.items().is_pending());
    assert!(matches!(row.items().child(), Some(SchemaRow::Enum(_))));
    assert_eq!(row.fragment(), None);

    // A fresh enum has no symbols yet, so nothing reaches the array.
    assert_eq!(row.settle(&*g), None);
}

#[test]
fn nested_mount_emission_reaches_the_array_at_settle() {
    let g = grammar();
    let mut row = ArrayRow::default();
    row.settle(&*g);
    row.set_item_type("map", &*g);

    let expected = SchemaFragment::array(SchemaFragment::map(
        SchemaFragment::primitive("string"),
        SchemaFragment::primitive("string"),
    ));
    assert_eq!(row.settle(&*g), Some(expected));
    assert!(!row.items().is_pending());
}

#[test]
fn nullable_toggle_on_pending_items_commits_without_emitting() {
    let g = grammar();
    let mut row = ArrayRow::default();
    row.set_item_type("record", &*g);
    assert_eq!(row.set_nullable(true, &*g), None);
    assert!(row.items().nullable());
    assert_eq!(row.error(), None);
}

#[test]
fn events_outside_the_vocabulary_are_refused() {
    let g = grammar();
    let mut row = ArrayRow::default();
    let err = row
        .handle(
            RowEvent::SetName {
                slot: 0,
                name: "x".into(),
            },
            &*g,
        )
        .unwrap_err();
    assert_eq!(
        err,
        RowError::Unsupported {
            kind: ComplexKind::Array,
            event: "set-name"
        }
    );

    let err = row
        .handle(
            RowEvent::SetType {
                slot: 1,
                type_name: "int".into(),
            },
            &*g,
        )
        .unwrap_err();
    assert!(matches!(err, RowError::IndexOutOfRange { index: 1, .. }));
}
