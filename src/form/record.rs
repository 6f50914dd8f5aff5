use uuid::Uuid;

use crate::domain::{ComplexKind, Field, RowSeed, SchemaFragment, is_complex};
use crate::schema::CandidateValidator;

use super::{
    actions::RowEvent,
    error::RowError,
    row::{RowEditor, SchemaRow},
    slot::{TypeSlot, quietly_validated, validated},
};

/// Synthetic identifier: `a` followed by 32 hex digits.
pub(crate) fn synthetic_name() -> String {
    format!("a{}", Uuid::new_v4().simple())
}

/// One editable field of a record.
#[derive(Debug)]
pub struct FieldRow {
    id: String,
    name: String,
    slot: TypeSlot,
}

impl FieldRow {
    fn blank() -> Self {
        Self {
            id: synthetic_name(),
            name: String::new(),
            slot: TypeSlot::default(),
        }
    }

    fn seeded(field: &Field) -> Self {
        Self {
            id: synthetic_name(),
            name: field.name.clone(),
            slot: TypeSlot::seeded(&field.ty),
        }
    }

    /// Stable across edits, inserts and removals of sibling fields.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot(&self) -> &TypeSlot {
        &self.slot
    }
}

type Entry = (String, Option<SchemaFragment>);

/// Editor for `{"type": "record", "name": ..., "fields": [...]}`.
///
/// Fields with a blank name, or whose nested editor has not reported yet,
/// stay in the display list but are left out of the emission.
#[derive(Debug)]
pub struct RecordRow {
    name: String,
    fields: Vec<FieldRow>,
    error: Option<String>,
    pending_mount: bool,
}

impl Default for RecordRow {
    fn default() -> Self {
        Self::mount(RowSeed::Default)
    }
}

impl RecordRow {
    pub fn mount(seed: RowSeed<'_>) -> Self {
        let resolved = seed.resolve();
        let (name, fields) = match resolved.as_deref() {
            Some(SchemaFragment::Record { name, fields }) if !fields.is_empty() => {
                (name.clone(), fields.iter().map(FieldRow::seeded).collect())
            }
            Some(SchemaFragment::Record { name, .. }) => (name.clone(), vec![FieldRow::blank()]),
            _ => (synthetic_name(), vec![FieldRow::blank()]),
        };
        Self {
            name,
            fields,
            error: None,
            pending_mount: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldRow] {
        &self.fields
    }

    pub fn set_field_name(
        &mut self,
        index: usize,
        value: &str,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let mut entries = self.entries();
        entries.get_mut(index)?.0 = value.to_string();
        let candidate = self.assemble(entries);
        let emitted = validated(&mut self.error, candidate, validator)?;
        self.fields[index].name = value.to_string();
        Some(emitted)
    }

    pub fn set_field_type(
        &mut self,
        index: usize,
        type_name: &str,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let field = self.fields.get(index)?;
        if is_complex(type_name) {
            self.fields[index].slot.mount(type_name);
            self.error = None;
            return quietly_validated(self.assemble(self.entries()), validator);
        }
        let candidate = field.slot.candidate_type(type_name);
        let mut entries = self.entries();
        entries[index].1 = Some(candidate);
        let candidate = self.assemble(entries);
        let emitted = validated(&mut self.error, candidate, validator)?;
        self.fields[index].slot.select_primitive(type_name);
        Some(emitted)
    }

    pub fn set_field_nullable(
        &mut self,
        index: usize,
        nullable: bool,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let field = self.fields.get(index)?;
        let Some(candidate) = field.slot.candidate_nullable(nullable) else {
            self.fields[index].slot.set_nullable(nullable);
            self.error = None;
            return None;
        };
        let mut entries = self.entries();
        entries[index].1 = Some(candidate);
        let candidate = self.assemble(entries);
        let emitted = validated(&mut self.error, candidate, validator)?;
        self.fields[index].slot.set_nullable(nullable);
        Some(emitted)
    }

    pub fn on_field_change(
        &mut self,
        index: usize,
        fragment: SchemaFragment,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let field = self.fields.get(index)?;
        let candidate = field.slot.candidate_child(&fragment);
        let mut entries = self.entries();
        entries[index].1 = Some(candidate);
        let candidate = self.assemble(entries);
        let emitted = validated(&mut self.error, candidate, validator)?;
        self.fields[index].slot.accept_child(fragment);
        Some(emitted)
    }

    /// Insert a blank `string` field after `at`.
    pub fn add_field(
        &mut self,
        at: usize,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let position = at.saturating_add(1).min(self.fields.len());
        self.fields.insert(position, FieldRow::blank());
        let candidate = self.assemble(self.entries());
        validated(&mut self.error, candidate, validator)
    }

    /// No-op on the last remaining field.
    pub fn remove_field(
        &mut self,
        index: usize,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        if self.fields.len() <= 1 || index >= self.fields.len() {
            return None;
        }
        self.fields.remove(index);
        let candidate = self.assemble(self.entries());
        validated(&mut self.error, candidate, validator)
    }

    fn entries(&self) -> Vec<Entry> {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.slot.emitted()))
            .collect()
    }

    fn assemble(&self, entries: Vec<Entry>) -> SchemaFragment {
        let fields = entries
            .into_iter()
            .filter_map(|(name, ty)| match ty {
                Some(ty) if !name.trim().is_empty() => Some(Field::new(name, ty)),
                _ => None,
            })
            .collect();
        SchemaFragment::record(self.name.clone(), fields)
    }
}

impl RowEditor for RecordRow {
    fn kind(&self) -> ComplexKind {
        ComplexKind::Record
    }

    fn handle(
        &mut self,
        event: RowEvent,
        validator: &dyn CandidateValidator,
    ) -> Result<Option<SchemaFragment>, RowError> {
        let len = self.fields.len();
        match event {
            RowEvent::SetName { slot, name } => {
                RowError::check_index("field", slot, len)?;
                Ok(self.set_field_name(slot, &name, validator))
            }
            RowEvent::SetType { slot, type_name } => {
                RowError::check_index("field", slot, len)?;
                Ok(self.set_field_type(slot, &type_name, validator))
            }
            RowEvent::SetNullable { slot, nullable } => {
                RowError::check_index("field", slot, len)?;
                Ok(self.set_field_nullable(slot, nullable, validator))
            }
            RowEvent::AddEntry { after } => {
                RowError::check_index("field", after, len)?;
                Ok(self.add_field(after, validator))
            }
            RowEvent::RemoveEntry { index } => {
                RowError::check_index("field", index, len)?;
                Ok(self.remove_field(index, validator))
            }
            other => Err(self.unsupported(&other)),
        }
    }

    fn on_child_change(
        &mut self,
        slot: usize,
        fragment: SchemaFragment,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        self.on_field_change(slot, fragment, validator)
    }

    fn slot_count(&self) -> usize {
        self.fields.len()
    }

    fn child(&self, slot: usize) -> Option<&SchemaRow> {
        self.fields.get(slot)?.slot.child()
    }

    fn child_mut(&mut self, slot: usize) -> Option<&mut SchemaRow> {
        self.fields.get_mut(slot)?.slot.child_mut()
    }

    fn fragment(&self) -> Option<SchemaFragment> {
        Some(self.assemble(self.entries()))
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn take_pending_mount(&mut self) -> bool {
        std::mem::take(&mut self.pending_mount)
    }
}
