use crate::domain::{ComplexKind, RowSeed, SchemaFragment};
use crate::schema::CandidateValidator;

use super::{
    actions::RowEvent, array::ArrayRow, enumeration::EnumRow, error::RowError, map::MapRow,
    record::RecordRow, union::UnionRow,
};

/// Capability shared by every complex-type editor.
///
/// Operations return the fragment to hand to the parent, or `None` when the
/// edit was rejected or produced nothing new to report.
pub trait RowEditor {
    fn kind(&self) -> ComplexKind;

    fn handle(
        &mut self,
        event: RowEvent,
        validator: &dyn CandidateValidator,
    ) -> Result<Option<SchemaFragment>, RowError>;

    /// Merge a nested editor's emission into `slot`.
    fn on_child_change(
        &mut self,
        slot: usize,
        fragment: SchemaFragment,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment>;

    fn slot_count(&self) -> usize;

    fn child(&self, slot: usize) -> Option<&SchemaRow>;

    fn child_mut(&mut self, slot: usize) -> Option<&mut SchemaRow>;

    /// Current emission shape, not validated.
    fn fragment(&self) -> Option<SchemaFragment>;

    fn error(&self) -> Option<&str>;

    /// Clear the deferred mount flag, reporting whether it was set.
    fn take_pending_mount(&mut self) -> bool;

    /// Flush deferred mount emissions, children first.
    ///
    /// Returns the latest emission for the parent; at most one per call.
    fn settle(&mut self, validator: &dyn CandidateValidator) -> Option<SchemaFragment> {
        let mut emission = None;
        for slot in 0..self.slot_count() {
            let settled = match self.child_mut(slot) {
                Some(child) => child.settle(validator),
                None => None,
            };
            if let Some(fragment) = settled
                && let Some(merged) = self.on_child_change(slot, fragment, validator)
            {
                emission = Some(merged);
            }
        }
        if self.take_pending_mount()
            && let Some(own) = self.fragment()
            && validator.validate(&own).is_ok()
        {
            emission = Some(own);
        }
        emission
    }

    fn unsupported(&self, event: &RowEvent) -> RowError {
        RowError::Unsupported {
            kind: self.kind(),
            event: event.name(),
        }
    }
}

/// Any complex-type editor.
#[derive(Debug)]
pub enum SchemaRow {
    Record(RecordRow),
    Array(ArrayRow),
    Map(MapRow),
    Enum(EnumRow),
    Union(UnionRow),
}

/// Mount the editor for `type_name`.
///
/// Primitives and unrecognised names get no nested editor.
pub fn render(type_name: &str, seed: RowSeed<'_>) -> Option<SchemaRow> {
    let row = match ComplexKind::from_type_name(type_name)? {
        ComplexKind::Record => SchemaRow::Record(RecordRow::mount(seed)),
        ComplexKind::Array => SchemaRow::Array(ArrayRow::mount(seed)),
        ComplexKind::Map => SchemaRow::Map(MapRow::mount(seed)),
        ComplexKind::Enum => SchemaRow::Enum(EnumRow::mount(seed)),
        ComplexKind::Union => SchemaRow::Union(UnionRow::mount(seed)),
    };
    Some(row)
}

impl SchemaRow {
    pub fn editor(&self) -> &dyn RowEditor {
        match self {
            SchemaRow::Record(row) => row,
            SchemaRow::Array(row) => row,
            SchemaRow::Map(row) => row,
            SchemaRow::Enum(row) => row,
            SchemaRow::Union(row) => row,
        }
    }

    pub fn editor_mut(&mut self) -> &mut dyn RowEditor {
        match self {
            SchemaRow::Record(row) => row,
            SchemaRow::Array(row) => row,
            SchemaRow::Map(row) => row,
            SchemaRow::Enum(row) => row,
            SchemaRow::Union(row) => row,
        }
    }
}

impl RowEditor for SchemaRow {
    fn kind(&self) -> ComplexKind {
        self.editor().kind()
    }

    fn handle(
        &mut self,
        event: RowEvent,
        validator: &dyn CandidateValidator,
    ) -> Result<Option<SchemaFragment>, RowError> {
        self.editor_mut().handle(event, validator)
    }

    fn on_child_change(
        &mut self,
        slot: usize,
        fragment: SchemaFragment,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        self.editor_mut().on_child_change(slot, fragment, validator)
    }

    fn slot_count(&self) -> usize {
        self.editor().slot_count()
    }

    fn child(&self, slot: usize) -> Option<&SchemaRow> {
        self.editor().child(slot)
    }

    fn child_mut(&mut self, slot: usize) -> Option<&mut SchemaRow> {
        self.editor_mut().child_mut(slot)
    }

    fn fragment(&self) -> Option<SchemaFragment> {
        self.editor().fragment()
    }

    fn error(&self) -> Option<&str> {
        self.editor().error()
    }

    fn take_pending_mount(&mut self) -> bool {
        self.editor_mut().take_pending_mount()
    }

    fn settle(&mut self, validator: &dyn CandidateValidator) -> Option<SchemaFragment> {
        self.editor_mut().settle(validator)
    }
}
