use thiserror::Error;

use crate::domain::ComplexKind;

/// Addressing errors raised while routing an event. Schema rejections are not
/// errors at this level; editors surface those on the failing row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("{kind} rows do not handle {event} events")]
    Unsupported {
        kind: ComplexKind,
        event: &'static str,
    },
    #[error("slot {slot} has no nested editor")]
    NoSuchRow { slot: usize },
    #[error("{what} index {index} is out of range for {len} entries")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

impl RowError {
    pub(crate) fn check_index(what: &'static str, index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(RowError::IndexOutOfRange { what, index, len })
        }
    }
}
