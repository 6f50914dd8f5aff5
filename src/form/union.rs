use crate::domain::{ComplexKind, RowSeed, SchemaFragment, is_complex};
use crate::schema::CandidateValidator;

use super::{
    actions::RowEvent,
    error::RowError,
    record::synthetic_name,
    row::{RowEditor, SchemaRow},
    slot::{TypeSlot, quietly_validated, validated},
};

#[derive(Debug)]
pub struct VariantRow {
    id: String,
    slot: TypeSlot,
}

impl VariantRow {
    fn new(slot: TypeSlot) -> Self {
        Self {
            id: synthetic_name(),
            slot,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn slot(&self) -> &TypeSlot {
        &self.slot
    }
}

/// Editor for a union, emitted as the bare member list.
#[derive(Debug)]
pub struct UnionRow {
    variants: Vec<VariantRow>,
    error: Option<String>,
    pending_mount: bool,
}

impl Default for UnionRow {
    fn default() -> Self {
        Self::mount(RowSeed::Default)
    }
}

impl UnionRow {
    pub fn mount(seed: RowSeed<'_>) -> Self {
        let variants = seed
            .resolve()
            .and_then(|fragment| {
                fragment.variants().map(|members| {
                    members
                        .iter()
                        .map(|member| VariantRow::new(TypeSlot::seeded(member)))
                        .collect::<Vec<_>>()
                })
            })
            .filter(|variants| !variants.is_empty())
            .unwrap_or_else(|| vec![VariantRow::new(TypeSlot::default())]);
        Self {
            variants,
            error: None,
            pending_mount: true,
        }
    }

    pub fn variants(&self) -> &[VariantRow] {
        &self.variants
    }

    pub fn set_variant_type(
        &mut self,
        index: usize,
        type_name: &str,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let variant = self.variants.get(index)?;
        if is_complex(type_name) {
            self.variants[index].slot.mount(type_name);
            self.error = None;
            return quietly_validated(self.assemble(self.members()), validator);
        }
        let candidate = variant.slot.candidate_type(type_name);
        let mut members = self.members();
        members[index] = Some(candidate);
        let candidate = self.assemble(members);
        let emitted = validated(&mut self.error, candidate, validator)?;
        self.variants[index].slot.select_primitive(type_name);
        Some(emitted)
    }

    pub fn set_variant_nullable(
        &mut self,
        index: usize,
        nullable: bool,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let variant = self.variants.get(index)?;
        let Some(candidate) = variant.slot.candidate_nullable(nullable) else {
            self.variants[index].slot.set_nullable(nullable);
            self.error = None;
            return None;
        };
        let mut members = self.members();
        members[index] = Some(candidate);
        let candidate = self.assemble(members);
        let emitted = validated(&mut self.error, candidate, validator)?;
        self.variants[index].slot.set_nullable(nullable);
        Some(emitted)
    }

    pub fn on_variant_change(
        &mut self,
        index: usize,
        fragment: SchemaFragment,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let variant = self.variants.get(index)?;
        let candidate = variant.slot.candidate_child(&fragment);
        let mut members = self.members();
        members[index] = Some(candidate);
        let candidate = self.assemble(members);
        let emitted = validated(&mut self.error, candidate, validator)?;
        self.variants[index].slot.accept_child(fragment);
        Some(emitted)
    }

    /// Insert a `string` variant after `at`. The row is always kept; an
    /// invalid member list is reported instead of emitted.
    pub fn add_variant(
        &mut self,
        at: usize,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let position = at.saturating_add(1).min(self.variants.len());
        self.variants
            .insert(position, VariantRow::new(TypeSlot::default()));
        let candidate = self.assemble(self.members());
        validated(&mut self.error, candidate, validator)
    }

    /// No-op on the last remaining variant.
    pub fn remove_variant(
        &mut self,
        index: usize,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        if self.variants.len() <= 1 || index >= self.variants.len() {
            return None;
        }
        self.variants.remove(index);
        let candidate = self.assemble(self.members());
        validated(&mut self.error, candidate, validator)
    }

    fn members(&self) -> Vec<Option<SchemaFragment>> {
        self.variants
            .iter()
            .map(|variant| variant.slot.emitted())
            .collect()
    }

    fn assemble(&self, members: Vec<Option<SchemaFragment>>) -> SchemaFragment {
        SchemaFragment::Union(members.into_iter().flatten().collect())
    }
}

impl RowEditor for UnionRow {
    fn kind(&self) -> ComplexKind {
        ComplexKind::Union
    }

    fn handle(
        &mut self,
        event: RowEvent,
        validator: &dyn CandidateValidator,
    ) -> Result<Option<SchemaFragment>, RowError> {
        let len = self.variants.len();
        match event {
            RowEvent::SetType { slot, type_name } => {
                RowError::check_index("variant", slot, len)?;
                Ok(self.set_variant_type(slot, &type_name, validator))
            }
            RowEvent::SetNullable { slot, nullable } => {
                RowError::check_index("variant", slot, len)?;
                Ok(self.set_variant_nullable(slot, nullable, validator))
            }
            RowEvent::AddEntry { after } => {
                RowError::check_index("variant", after, len)?;
                Ok(self.add_variant(after, validator))
            }
            RowEvent::RemoveEntry { index } => {
                RowError::check_index("variant", index, len)?;
                Ok(self.remove_variant(index, validator))
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
        self.on_variant_change(slot, fragment, validator)
    }

    fn slot_count(&self) -> usize {
        self.variants.len()
    }

    fn child(&self, slot: usize) -> Option<&SchemaRow> {
        self.variants.get(slot)?.slot.child()
    }

    fn child_mut(&mut self, slot: usize) -> Option<&mut SchemaRow> {
        self.variants.get_mut(slot)?.slot.child_mut()
    }

    fn fragment(&self) -> Option<SchemaFragment> {
        Some(self.assemble(self.members()))
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn take_pending_mount(&mut self) -> bool {
        std::mem::take(&mut self.pending_mount)
    }
}
