use crate::domain::{ComplexKind, DEFAULT_TYPE, RowSeed, SchemaFragment, is_complex};
use crate::schema::CandidateValidator;

use super::{
    actions::RowEvent,
    error::RowError,
    row::{RowEditor, SchemaRow},
    slot::{TypeSlot, validated},
};

pub const KEYS_SLOT: usize = 0;
pub const VALUES_SLOT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Keys,
    Values,
}

impl Side {
    fn from_slot(slot: usize) -> Result<Self, RowError> {
        match slot {
            KEYS_SLOT => Ok(Side::Keys),
            VALUES_SLOT => Ok(Side::Values),
            index => Err(RowError::IndexOutOfRange {
                what: "map side",
                index,
                len: 2,
            }),
        }
    }
}

/// Editor for `{"type": "map", "keys": K, "values": V}`.
///
/// Keys and values are independent slots; a rejected edit on one side never
/// touches the other.
#[derive(Debug)]
pub struct MapRow {
    keys: TypeSlot,
    values: TypeSlot,
    error: Option<String>,
    pending_mount: bool,
}

impl Default for MapRow {
    fn default() -> Self {
        Self::mount(RowSeed::Default)
    }
}

impl MapRow {
    pub fn mount(seed: RowSeed<'_>) -> Self {
        let resolved = seed.resolve();
        let keys = resolved
            .as_deref()
            .and_then(SchemaFragment::keys_type)
            .map(TypeSlot::seeded)
            .unwrap_or_default();
        let values = resolved
            .as_deref()
            .and_then(SchemaFragment::values_type)
            .map(TypeSlot::seeded)
            .unwrap_or_default();
        Self {
            keys,
            values,
            error: None,
            pending_mount: true,
        }
    }

    pub fn keys(&self) -> &TypeSlot {
        &self.keys
    }

    pub fn values(&self) -> &TypeSlot {
        &self.values
    }

    pub fn set_keys_type(
        &mut self,
        type_name: &str,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        self.set_type(Side::Keys, type_name, validator)
    }

    pub fn set_keys_nullable(
        &mut self,
        nullable: bool,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        self.set_nullable(Side::Keys, nullable, validator)
    }

    pub fn on_keys_change(
        &mut self,
        fragment: SchemaFragment,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        self.on_side_change(Side::Keys, fragment, validator)
    }

    pub fn set_values_type(
        &mut self,
        type_name: &str,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        self.set_type(Side::Values, type_name, validator)
    }

    pub fn set_values_nullable(
        &mut self,
        nullable: bool,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        self.set_nullable(Side::Values, nullable, validator)
    }

    pub fn on_values_change(
        &mut self,
        fragment: SchemaFragment,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        self.on_side_change(Side::Values, fragment, validator)
    }

    fn side(&self, side: Side) -> &TypeSlot {
        match side {
            Side::Keys => &self.keys,
            Side::Values => &self.values,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut TypeSlot {
        match side {
            Side::Keys => &mut self.keys,
            Side::Values => &mut self.values,
        }
    }

    /// Map candidate with `side` replaced. A pending opposite side is checked
    /// against the default type so that one side can be validated on its own.
    fn candidate(&self, side: Side, replacement: SchemaFragment) -> SchemaFragment {
        let other = |slot: &TypeSlot| {
            slot.emitted()
                .unwrap_or_else(|| SchemaFragment::primitive(DEFAULT_TYPE))
        };
        match side {
            Side::Keys => SchemaFragment::map(replacement, other(&self.values)),
            Side::Values => SchemaFragment::map(other(&self.keys), replacement),
        }
    }

    fn set_type(
        &mut self,
        side: Side,
        type_name: &str,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        if is_complex(type_name) {
            self.side_mut(side).mount(type_name);
            self.error = None;
            return None;
        }
        let candidate = self.candidate(side, self.side(side).candidate_type(type_name));
        validated(&mut self.error, candidate, validator)?;
        self.side_mut(side).select_primitive(type_name);
        self.fragment()
    }

    fn set_nullable(
        &mut self,
        side: Side,
        nullable: bool,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let Some(replacement) = self.side(side).candidate_nullable(nullable) else {
            self.side_mut(side).set_nullable(nullable);
            self.error = None;
            return None;
        };
        let candidate = self.candidate(side, replacement);
        validated(&mut self.error, candidate, validator)?;
        self.side_mut(side).set_nullable(nullable);
        self.fragment()
    }

    fn on_side_change(
        &mut self,
        side: Side,
        fragment: SchemaFragment,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let candidate = self.candidate(side, self.side(side).candidate_child(&fragment));
        validated(&mut self.error, candidate, validator)?;
        self.side_mut(side).accept_child(fragment);
        self.fragment()
    }
}

impl RowEditor for MapRow {
    fn kind(&self) -> ComplexKind {
        ComplexKind::Map
    }

    fn handle(
        &mut self,
        event: RowEvent,
        validator: &dyn CandidateValidator,
    ) -> Result<Option<SchemaFragment>, RowError> {
        match event {
            RowEvent::SetType { slot, type_name } => {
                let side = Side::from_slot(slot)?;
                Ok(self.set_type(side, &type_name, validator))
            }
            RowEvent::SetNullable { slot, nullable } => {
                let side = Side::from_slot(slot)?;
                Ok(self.set_nullable(side, nullable, validator))
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
        let side = Side::from_slot(slot).ok()?;
        self.on_side_change(side, fragment, validator)
    }

    fn slot_count(&self) -> usize {
        2
    }

    fn child(&self, slot: usize) -> Option<&SchemaRow> {
        let side = Side::from_slot(slot).ok()?;
        self.side(side).child()
    }

    fn child_mut(&mut self, slot: usize) -> Option<&mut SchemaRow> {
        let side = Side::from_slot(slot).ok()?;
        self.side_mut(side).child_mut()
    }

    /// `None` while either side waits for its nested editor.
    fn fragment(&self) -> Option<SchemaFragment> {
        Some(SchemaFragment::map(
            self.keys.emitted()?,
            self.values.emitted()?,
        ))
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn take_pending_mount(&mut self) -> bool {
        std::mem::take(&mut self.pending_mount)
    }
}
