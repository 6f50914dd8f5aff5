use crate::domain::{RowSeed, SchemaFragment};
use crate::form::{RowEditor, UnionRow};

use super::grammar;

fn union(members: Vec<SchemaFragment>) -> SchemaFragment {
    SchemaFragment::Union(members)
}

fn prim(name: &str) -> SchemaFragment {
    SchemaFragment::primitive(name)
}

#[test]
fn fresh_union_holds_a_single_string() {
    let g = grammar();
    let mut row = UnionRow::default();
    assert_eq!(row.variants().len(), 1);
    assert_eq!(row.settle(&*g), Some(union(vec![prim("string")])));
}

#[test]
fn duplicate_members_are_reported_until_resolved() {
    let g = grammar();
    let mut row = UnionRow::default();
    row.settle(&*g);

    // The new variant defaults to string, which duplicates the first.
    assert_eq!(row.add_variant(0, &*g), None);
    assert_eq!(row.variants().len(), 2);
    assert!(row.error().is_some());

    assert_eq!(
        row.set_variant_type(1, "int", &*g),
        Some(union(vec![prim("string"), prim("int")]))
    );
    assert_eq!(row.error(), None);

    assert_eq!(
        row.set_variant_nullable(1, true, &*g),
        Some(union(vec![prim("string"), prim("int").nullable()]))
    );
}

#[test]
fn removing_a_variant_emits_the_rest() {
    let g = grammar();
    let seed = union(vec![prim("string"), prim("int"), prim("boolean")]);
    let mut row = UnionRow::mount(RowSeed::Fragment(&seed));
    assert_eq!(
        row.remove_variant(0, &*g),
        Some(union(vec![prim("int"), prim("boolean")]))
    );
}

#[test]
fn the_last_variant_cannot_be_removed() {
    let g = grammar();
    let mut row = UnionRow::default();
    assert_eq!(row.remove_variant(0, &*g), None);
    assert_eq!(row.variants().len(), 1);
}

#[test]
fn complex_variant_joins_after_its_editor_reports() {
    let g = grammar();
    let mut row = UnionRow::default();
    row.add_variant(0, &*g);

    assert_eq!(
        row.set_variant_type(1, "map", &*g),
        Some(union(vec![prim("string")]))
    );
    assert_eq!(
        row.settle(&*g),
        Some(union(vec![
            prim("string"),
            SchemaFragment::map(prim("string"), prim("string")),
        ]))
    );
}

#[test]
fn variant_ids_are_distinct() {
    let g = grammar();
    let mut row = UnionRow::default();
    row.add_variant(0, &*g);
    assert_ne!(row.variants()[0].id(), row.variants()[1].id());
}

#[test]
fn add_variant_after_the_largest_index_appends() {
    let g = grammar();
    let mut row = UnionRow::default();
    row.add_variant(usize::MAX, &*g);
    assert_eq!(row.variants().len(), 2);
    assert_eq!(row.variants()[1].slot().display_type(), "string");
}
