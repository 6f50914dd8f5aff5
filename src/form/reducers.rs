use tracing::{debug, warn};

use crate::domain::SchemaFragment;
use crate::schema::CandidateValidator;

use super::{
    actions::{RowEvent, RowPath},
    error::RowError,
    row::{RowEditor, SchemaRow},
};

/// Apply `event` to the editor at `path` below `row`, then hand each emission
/// to the enclosing editors until one of them declines to emit.
pub fn apply_event(
    row: &mut SchemaRow,
    path: &[usize],
    event: RowEvent,
    validator: &dyn CandidateValidator,
) -> Result<Option<SchemaFragment>, RowError> {
    let Some((&slot, rest)) = path.split_first() else {
        return row.handle(event, validator);
    };
    let child = row.child_mut(slot).ok_or(RowError::NoSuchRow { slot })?;
    match apply_event(child, rest, event, validator)? {
        Some(fragment) => Ok(row.on_child_change(slot, fragment, validator)),
        None => Ok(None),
    }
}

pub struct SchemaEngine<'a> {
    root: &'a mut SchemaRow,
    validator: &'a dyn CandidateValidator,
}

impl<'a> SchemaEngine<'a> {
    pub fn new(root: &'a mut SchemaRow, validator: &'a dyn CandidateValidator) -> Self {
        Self { root, validator }
    }

    /// Route one event and return the resulting root emission, if any.
    pub fn dispatch(
        &mut self,
        path: &RowPath,
        event: RowEvent,
    ) -> Result<Option<SchemaFragment>, RowError> {
        let name = event.name();
        match apply_event(self.root, path.slots(), event, self.validator) {
            Ok(emission) => {
                debug!(%path, event = name, emitted = emission.is_some(), "row event applied");
                Ok(emission)
            }
            Err(err) => {
                warn!(%path, event = name, error = %err, "row event rejected");
                Err(err)
            }
        }
    }

    /// Flush pending mount emissions below the root.
    pub fn settle(&mut self) -> Option<SchemaFragment> {
        self.root.settle(self.validator)
    }
}
