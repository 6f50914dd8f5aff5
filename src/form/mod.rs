mod actions;
mod array;
mod enumeration;
mod error;
mod map;
mod record;
mod reducers;
mod row;
mod slot;
mod state;
mod union;

pub use actions::{RowEvent, RowPath};
pub use array::ArrayRow;
pub use enumeration::EnumRow;
pub use error::RowError;
pub use map::{KEYS_SLOT, MapRow, VALUES_SLOT};
pub use record::{FieldRow, RecordRow};
pub use reducers::{SchemaEngine, apply_event};
pub use row::{RowEditor, SchemaRow, render};
pub use slot::TypeSlot;
pub use state::{EditorOptions, LineTarget, OutlineLine, SchemaEditor};
pub use union::{UnionRow, VariantRow};
