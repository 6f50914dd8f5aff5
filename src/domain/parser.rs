use std::borrow::Cow;

use serde_json::Value;
use tracing::debug;

use super::fragment::SchemaFragment;

/// A type decomposed into the shape a type picker shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedType {
    /// Name shown in the picker, e.g. `int` or `record`.
    pub display_type: String,
    /// Whether the type was written as `[T, "null"]`.
    pub nullable: bool,
    /// The wrapper was written `["null", T]`.
    pub null_first: bool,
    /// The type with any nullable wrapper removed.
    pub fragment: SchemaFragment,
}

impl ParsedType {
    /// Re-apply the nullable wrapper.
    pub fn to_fragment(&self) -> SchemaFragment {
        self.fragment
            .clone()
            .wrap_nullable_at(self.nullable, self.null_first)
    }
}

/// Split a fragment into its picker shape.
pub fn parse_type(fragment: &SchemaFragment) -> ParsedType {
    let (inner, nullable) = fragment.split_nullable();
    ParsedType {
        display_type: inner.type_name().to_string(),
        nullable,
        null_first: nullable
            && fragment
                .variants()
                .and_then(<[SchemaFragment]>::first)
                .is_some_and(SchemaFragment::is_null),
        fragment: inner.clone(),
    }
}

/// Decompose the fields of a record fragment. Non-records have no fields.
pub fn parse_fields(fragment: &SchemaFragment) -> Vec<(String, ParsedType)> {
    fragment
        .fields()
        .unwrap_or_default()
        .iter()
        .map(|field| (field.name.clone(), parse_type(&field.ty)))
        .collect()
}

/// Initial content for a freshly mounted row editor.
#[derive(Debug, Clone, Copy, Default)]
pub enum RowSeed<'a> {
    #[default]
    Default,
    /// A bare type name; complex editors start from their default state.
    Name(&'a str),
    /// A raw JSON type document.
    Value(&'a Value),
    Fragment(&'a SchemaFragment),
}

impl<'a> RowSeed<'a> {
    /// The fragment carried by the seed, if any. Undecodable values count as absent.
    pub fn resolve(&self) -> Option<Cow<'a, SchemaFragment>> {
        match *self {
            RowSeed::Default | RowSeed::Name(_) => None,
            RowSeed::Fragment(fragment) => Some(Cow::Borrowed(fragment)),
            RowSeed::Value(value) => match SchemaFragment::try_from(value) {
                Ok(fragment) => Some(Cow::Owned(fragment)),
                Err(err) => {
                    debug!(error = %err, "ignoring undecodable row seed");
                    None
                }
            },
        }
    }
}

impl<'a> From<&'a SchemaFragment> for RowSeed<'a> {
    fn from(fragment: &'a SchemaFragment) -> Self {
        RowSeed::Fragment(fragment)
    }
}

impl<'a> From<&'a Value> for RowSeed<'a> {
    fn from(value: &'a Value) -> Self {
        RowSeed::Value(value)
    }
}
