use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::json;

use crate::domain::{ComplexKind, Field, SchemaFragment};
use crate::form::{
    EditorOptions, LineTarget, RowError, RowEvent, RowPath, SchemaEditor, SchemaRow, VALUES_SLOT,
};
use crate::schema::CandidateValidator;

fn prim(name: &str) -> SchemaFragment {
    SchemaFragment::primitive(name)
}

fn root_name(editor: &SchemaEditor) -> String {
    match editor.root() {
        SchemaRow::Record(record) => record.name().to_string(),
        other => panic!("expected a record root, found {other:?}"),
    }
}

fn set_type(slot: usize, type_name: &str) -> RowEvent {
    RowEvent::SetType {
        slot,
        type_name: type_name.into(),
    }
}

fn recording(editor: &mut SchemaEditor) -> Rc<RefCell<Vec<SchemaFragment>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    editor.on_change(move |fragment| sink.borrow_mut().push(fragment.clone()));
    seen
}

#[test]
fn listener_sees_the_mount_emission_once() {
    let mut editor = SchemaEditor::default();
    let seen = recording(&mut editor);
    assert!(editor.settle().is_some());
    assert!(editor.settle().is_none());
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(editor.schema(), seen.borrow().last());
}

#[test]
fn nested_edits_propagate_to_the_root_in_one_dispatch() {
    let mut editor = SchemaEditor::default();
    let seen = recording(&mut editor);
    editor.settle();
    let root = RowPath::root();

    editor
        .dispatch(
            &root,
            RowEvent::SetName {
                slot: 0,
                name: "first".into(),
            },
        )
        .unwrap();
    editor.dispatch(&root, set_type(0, "array")).unwrap();
    editor.settle();
    editor.dispatch(&RowPath::from([0]), set_type(0, "map")).unwrap();
    editor.settle();

    let before = seen.borrow().len();
    let emitted = editor
        .dispatch(&RowPath::from([0, 0]), set_type(VALUES_SLOT, "long"))
        .unwrap();
    let expected = SchemaFragment::record(
        root_name(&editor),
        vec![Field::new(
            "first",
            SchemaFragment::array(SchemaFragment::map(prim("string"), prim("long"))),
        )],
    );
    assert_eq!(emitted, Some(expected.clone()));
    assert_eq!(seen.borrow().len(), before + 1);
    assert_eq!(editor.current(), Some(expected));
}

#[test]
fn rejections_show_up_in_errors_and_outline() {
    let mut editor = SchemaEditor::default();
    editor.settle();
    let emitted = editor
        .dispatch(
            &RowPath::root(),
            RowEvent::SetName {
                slot: 0,
                name: "1bad".into(),
            },
        )
        .unwrap();
    assert_eq!(emitted, None);

    let errors = editor.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, RowPath::root());
    assert!(errors[0].1.contains("1bad"));
    assert_eq!(editor.outline()[0].error.as_deref(), Some(errors[0].1.as_str()));
}

#[test]
fn default_outline_is_one_unnamed_string_field() {
    let editor = SchemaEditor::default();
    let outline = editor.outline();
    assert_eq!(outline.len(), 1);
    let line = &outline[0];
    assert_eq!(line.path, RowPath::root());
    assert_eq!(line.target, LineTarget::Field(0));
    assert_eq!(line.depth, 0);
    assert_eq!(line.label, "<unnamed>");
    assert_eq!(line.type_name.as_deref(), Some("string"));
    assert!(!line.nullable);
}

#[test]
fn outline_descends_into_nested_editors() {
    let editor = SchemaEditor::from_value(&json!({
        "type": "record",
        "name": "Doc",
        "fields": [
            {"name": "tags", "type": {"type": "array", "items": "string"}},
            {"name": "kind", "type": {"type": "enum", "symbols": ["A", "B"]}}
        ]
    }))
    .unwrap();
    let outline = editor.outline();
    let labels: Vec<&str> = outline.iter().map(|line| line.label.as_str()).collect();
    assert_eq!(labels, ["tags", "items", "kind", "A", "B"]);
    assert_eq!(outline[1].path, RowPath::from([0]));
    assert_eq!(outline[1].depth, 1);
    assert_eq!(outline[3].target, LineTarget::Symbol(0));
    assert_eq!(outline[3].type_name, None);
}

#[test]
fn non_complex_roots_are_refused() {
    assert!(SchemaEditor::from_value(&json!("string")).is_err());
    assert!(SchemaEditor::from_value(&json!({"type": "nope"})).is_err());

    let editor = SchemaEditor::from_value(&json!({"type": "enum", "symbols": ["A"]})).unwrap();
    assert!(matches!(editor.root(), SchemaRow::Enum(_)));
}

#[test]
fn saved_nullable_union_root_reopens() {
    let mut editor = SchemaEditor::new(EditorOptions::default().with_root(ComplexKind::Union));
    editor.settle();
    let root = RowPath::root();
    editor
        .dispatch(&root, RowEvent::AddEntry { after: 0 })
        .unwrap();
    let saved = editor.dispatch(&root, set_type(1, "null")).unwrap().unwrap();
    assert_eq!(saved.to_value(), json!(["string", "null"]));

    let mut reopened = SchemaEditor::from_value(&saved.to_value()).unwrap();
    assert!(matches!(reopened.root(), SchemaRow::Union(_)));
    assert_eq!(reopened.settle(), Some(saved));
}

#[test]
fn nullable_wrapper_around_a_complex_root_is_dropped() {
    let document = json!([{"type": "enum", "symbols": ["A"]}, "null"]);
    let mut editor = SchemaEditor::from_value(&document).unwrap();
    assert!(matches!(editor.root(), SchemaRow::Enum(_)));
    assert_eq!(editor.settle(), Some(SchemaFragment::enumeration(["A"])));
}

#[test]
fn root_kind_follows_options() {
    let mut editor = SchemaEditor::new(EditorOptions::default().with_root(ComplexKind::Map));
    assert_eq!(
        editor.settle(),
        Some(SchemaFragment::map(prim("string"), prim("string")))
    );
}

#[test]
fn routing_to_a_missing_row_is_an_error() {
    let mut editor = SchemaEditor::default();
    let err = editor
        .dispatch(&RowPath::from([0]), set_type(0, "int"))
        .unwrap_err();
    assert_eq!(err, RowError::NoSuchRow { slot: 0 });
    assert_eq!(err.to_string(), "slot 0 has no nested editor");
}

#[test]
fn emissions_mark_the_editor_dirty() {
    let mut editor = SchemaEditor::default();
    assert!(!editor.is_dirty());
    editor.settle();
    assert!(editor.is_dirty());
    editor.mark_clean();
    assert!(!editor.is_dirty());
}

#[test]
fn custom_validator_replaces_the_grammar() {
    let strict: Arc<dyn CandidateValidator> =
        Arc::new(|_: &SchemaFragment| Err::<(), String>("locked".to_string()));
    let mut editor = SchemaEditor::default().with_validator(strict);
    assert_eq!(editor.settle(), None);
    assert_eq!(
        editor
            .dispatch(
                &RowPath::root(),
                RowEvent::SetName {
                    slot: 0,
                    name: "id".into(),
                },
            )
            .unwrap(),
        None
    );
    assert_eq!(editor.errors(), vec![(RowPath::root(), "locked".to_string())]);
    assert_eq!(editor.current(), None);
}
