use crate::domain::{RowSeed, SchemaFragment};
use crate::form::{EnumRow, RowEditor};

use super::grammar;

fn seeded(symbols: &[&str]) -> EnumRow {
    let fragment = SchemaFragment::enumeration(symbols.iter().copied());
    EnumRow::mount(RowSeed::Fragment(&fragment))
}

#[test]
fn fresh_enum_shows_one_blank_symbol_and_emits_nothing() {
    let g = grammar();
    let mut row = EnumRow::default();
    assert_eq!(row.symbols(), [String::new()]);
    assert_eq!(row.settle(&*g), None);
}

#[test]
fn naming_the_first_symbol_emits() {
    let g = grammar();
    let mut row = EnumRow::default();
    assert_eq!(
        row.set_symbol(0, "RED", &*g),
        Some(SchemaFragment::enumeration(["RED"]))
    );
}

#[test]
fn blank_inserts_are_placeholders() {
    let g = grammar();
    let mut row = seeded(&["RED"]);
    assert_eq!(row.insert_symbol(0, "", &*g), None);
    assert_eq!(row.symbols(), ["RED".to_string(), String::new()]);
    assert_eq!(row.fragment(), Some(SchemaFragment::enumeration(["RED"])));

    assert_eq!(
        row.set_symbol(1, "GREEN", &*g),
        Some(SchemaFragment::enumeration(["RED", "GREEN"]))
    );
}

#[test]
fn named_inserts_are_validated() {
    let g = grammar();
    let mut row = seeded(&["RED", "BLUE"]);
    assert_eq!(
        row.insert_symbol(0, "GREEN", &*g),
        Some(SchemaFragment::enumeration(["RED", "GREEN", "BLUE"]))
    );
    assert_eq!(row.insert_symbol(2, "RED", &*g), None);
    assert!(row.error().is_some());
    assert_eq!(row.symbols().len(), 3);
}

#[test]
fn invalid_symbol_is_not_committed() {
    let g = grammar();
    let mut row = seeded(&["RED"]);
    assert_eq!(row.set_symbol(0, "9lives", &*g), None);
    assert_eq!(row.symbols(), ["RED".to_string()]);
    assert!(row.error().unwrap().contains("9lives"));
}

#[test]
fn removing_a_symbol_emits_the_rest() {
    let g = grammar();
    let mut row = seeded(&["A", "B", "C"]);
    assert_eq!(
        row.remove_symbol(1, &*g),
        Some(SchemaFragment::enumeration(["A", "C"]))
    );
}

#[test]
fn removing_the_last_symbol_is_a_noop() {
    let g = grammar();
    let mut row = seeded(&["ONLY"]);
    assert_eq!(row.remove_symbol(0, &*g), None);
    assert_eq!(row.symbols(), ["ONLY".to_string()]);
    assert_eq!(row.error(), None);
}

#[test]
fn insert_after_the_largest_index_appends() {
    let g = grammar();
    let mut row = seeded(&["A"]);
    assert_eq!(
        row.insert_symbol(usize::MAX, "B", &*g),
        Some(SchemaFragment::enumeration(["A", "B"]))
    );
}
