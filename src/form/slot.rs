use crate::domain::{DEFAULT_TYPE, RowSeed, SchemaFragment, parse_type};
use crate::schema::CandidateValidator;

use super::row::{SchemaRow, render};

/// One "type picker + nullable checkbox + nested editor" unit.
///
/// Array items, each side of a map, every record field and every union
/// variant own one slot.
#[derive(Debug)]
pub struct TypeSlot {
    display_type: String,
    nullable: bool,
    /// Keep `["null", T]` ordering of a seeded type.
    null_first: bool,
    /// Last accepted inner type; `None` while a nested editor has not reported.
    parsed: Option<SchemaFragment>,
    child: Option<Box<SchemaRow>>,
}

impl Default for TypeSlot {
    fn default() -> Self {
        Self::primitive(DEFAULT_TYPE)
    }
}

impl TypeSlot {
    pub fn primitive(type_name: &str) -> Self {
        Self {
            display_type: type_name.to_string(),
            nullable: false,
            null_first: false,
            parsed: Some(SchemaFragment::primitive(type_name)),
            child: None,
        }
    }

    /// Decompose an external type, mounting a nested editor for complex types.
    pub fn seeded(fragment: &SchemaFragment) -> Self {
        let parsed = parse_type(fragment);
        let child = render(&parsed.display_type, RowSeed::Fragment(&parsed.fragment)).map(Box::new);
        Self {
            display_type: parsed.display_type,
            nullable: parsed.nullable,
            null_first: parsed.null_first,
            parsed: Some(parsed.fragment),
            child,
        }
    }

    pub fn display_type(&self) -> &str {
        &self.display_type
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn parsed(&self) -> Option<&SchemaFragment> {
        self.parsed.as_ref()
    }

    pub fn child(&self) -> Option<&SchemaRow> {
        self.child.as_deref()
    }

    pub fn child_mut(&mut self) -> Option<&mut SchemaRow> {
        self.child.as_deref_mut()
    }

    pub fn is_pending(&self) -> bool {
        self.parsed.is_none()
    }

    /// The type this slot contributes to its parent, nullable wrapper included.
    pub fn emitted(&self) -> Option<SchemaFragment> {
        self.parsed
            .clone()
            .map(|inner| inner.wrap_nullable_at(self.nullable, self.null_first))
    }

    pub fn candidate_type(&self, type_name: &str) -> SchemaFragment {
        SchemaFragment::primitive(type_name).wrap_nullable_at(self.nullable, self.null_first)
    }

    /// `None` while the nested editor is pending.
    pub fn candidate_nullable(&self, nullable: bool) -> Option<SchemaFragment> {
        self.parsed
            .clone()
            .map(|inner| inner.wrap_nullable_at(nullable, self.null_first))
    }

    pub fn candidate_child(&self, fragment: &SchemaFragment) -> SchemaFragment {
        fragment.clone().wrap_nullable_at(self.nullable, self.null_first)
    }

    /// Commit a primitive selection, unmounting any nested editor.
    pub fn select_primitive(&mut self, type_name: &str) {
        self.display_type = type_name.to_string();
        self.parsed = Some(SchemaFragment::primitive(type_name));
        self.child = None;
    }

    /// Commit a complex selection. The slot stays pending until the new
    /// editor reports.
    pub fn mount(&mut self, type_name: &str) {
        self.display_type = type_name.to_string();
        self.parsed = None;
        self.child = render(type_name, RowSeed::Name(type_name)).map(Box::new);
    }

    pub fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }

    pub fn accept_child(&mut self, fragment: SchemaFragment) {
        self.parsed = Some(fragment);
    }
}

/// Validate `candidate`, recording the outcome in `error`.
///
/// Returns the candidate when it passed, so callers commit after `?`.
pub(crate) fn validated(
    error: &mut Option<String>,
    candidate: SchemaFragment,
    validator: &dyn CandidateValidator,
) -> Option<SchemaFragment> {
    match validator.validate(&candidate) {
        Ok(()) => {
            *error = None;
            Some(candidate)
        }
        Err(message) => {
            *error = Some(message);
            None
        }
    }
}

/// Like [`validated`] but never surfaces a message; used for emissions that
/// follow a structural change the user did not type.
pub(crate) fn quietly_validated(
    candidate: SchemaFragment,
    validator: &dyn CandidateValidator,
) -> Option<SchemaFragment> {
    validator.validate(&candidate).ok().map(|_| candidate)
}
