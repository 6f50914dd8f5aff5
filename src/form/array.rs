use crate::domain::{ComplexKind, RowSeed, SchemaFragment, is_complex};
use crate::schema::CandidateValidator;

use super::{
    actions::RowEvent,
    error::RowError,
    row::{RowEditor, SchemaRow},
    slot::{TypeSlot, validated},
};

/// Editor for `{"type": "array", "items": T}`.
#[derive(Debug)]
pub struct ArrayRow {
    items: TypeSlot,
    error: Option<String>,
    pending_mount: bool,
}

impl Default for ArrayRow {
    fn default() -> Self {
        Self::mount(RowSeed::Default)
    }
}

impl ArrayRow {
    pub fn mount(seed: RowSeed<'_>) -> Self {
        let items = seed
            .resolve()
            .and_then(|fragment| fragment.items_type().map(TypeSlot::seeded))
            .unwrap_or_default();
        Self {
            items,
            error: None,
            pending_mount: true,
        }
    }

    pub fn items(&self) -> &TypeSlot {
        &self.items
    }

    pub fn set_item_type(
        &mut self,
        type_name: &str,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        if is_complex(type_name) {
            self.items.mount(type_name);
            self.error = None;
            return None;
        }
        let candidate = SchemaFragment::array(self.items.candidate_type(type_name));
        let emitted = validated(&mut self.error, candidate, validator)?;
        self.items.select_primitive(type_name);
        Some(emitted)
    }

    pub fn set_nullable(
        &mut self,
        nullable: bool,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let Some(items) = self.items.candidate_nullable(nullable) else {
            self.items.set_nullable(nullable);
            self.error = None;
            return None;
        };
        let emitted = validated(&mut self.error, SchemaFragment::array(items), validator)?;
        self.items.set_nullable(nullable);
        Some(emitted)
    }

    pub fn on_items_change(
        &mut self,
        fragment: SchemaFragment,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let candidate = SchemaFragment::array(self.items.candidate_child(&fragment));
        let emitted = validated(&mut self.error, candidate, validator)?;
        self.items.accept_child(fragment);
        Some(emitted)
    }
}

impl RowEditor for ArrayRow {
    fn kind(&self) -> ComplexKind {
        ComplexKind::Array
    }

    fn handle(
        &mut self,
        event: RowEvent,
        validator: &dyn CandidateValidator,
    ) -> Result<Option<SchemaFragment>, RowError> {
        match event {
            RowEvent::SetType { slot, type_name } => {
                RowError::check_index("items", slot, 1)?;
                Ok(self.set_item_type(&type_name, validator))
            }
            RowEvent::SetNullable { slot, nullable } => {
                RowError::check_index("items", slot, 1)?;
                Ok(self.set_nullable(nullable, validator))
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
        match slot {
            0 => self.on_items_change(fragment, validator),
            _ => None,
        }
    }

    fn slot_count(&self) -> usize {
        1
    }

    fn child(&self, slot: usize) -> Option<&SchemaRow> {
        match slot {
            0 => self.items.child(),
            _ => None,
        }
    }

    fn child_mut(&mut self, slot: usize) -> Option<&mut SchemaRow> {
        match slot {
            0 => self.items.child_mut(),
            _ => None,
        }
    }

    fn fragment(&self) -> Option<SchemaFragment> {
        self.items.emitted().map(SchemaFragment::array)
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn take_pending_mount(&mut self) -> bool {
        std::mem::take(&mut self.pending_mount)
    }
}
