//! Peripheral data-wrangling view: column selection, action panels and the
//! boundaries to the external parser and transform store.

mod actions;
mod source;
mod store;
mod view;

pub use actions::{Row, SortOrder, WranglerAction, action_vocabulary_schema};
pub use source::{DelimitedParser, ParseOptions, ParsedRows, format_rows, load_text};
pub use store::{ColumnErrors, Histogram, WranglerSnapshot, WranglerStore};
pub use view::{CaseTransform, ColumnPanel, Metrics, PanelInputs, ViewError, WrangleView};
