use std::collections::BTreeSet;

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::actions::{Row, WranglerAction};

/// Rows of one column that failed type inference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnErrors {
    pub count: usize,
    pub rows: BTreeSet<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

/// Read-only view of the transform store's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WranglerSnapshot {
    pub headers_list: Vec<String>,
    pub data: Vec<Row>,
    pub column_types: IndexMap<String, String>,
    pub errors: IndexMap<String, ColumnErrors>,
    pub histogram: IndexMap<String, Histogram>,
    pub history: Vec<WranglerAction>,
}

impl WranglerSnapshot {
    /// Errors summed over the current headers only.
    pub fn error_count(&self) -> usize {
        self.headers_list
            .iter()
            .filter_map(|header| self.errors.get(header))
            .map(|errors| errors.count)
            .sum()
    }

    pub fn has_error(&self, column: &str, row: usize) -> bool {
        self.errors
            .get(column)
            .is_some_and(|errors| errors.rows.contains(&row))
    }
}

/// The external transform store. Type inference, history and histograms are
/// the store's business; the view only dispatches and reads.
pub trait WranglerStore {
    fn dispatch(&mut self, action: WranglerAction) -> Result<()>;

    fn snapshot(&self) -> &WranglerSnapshot;
}
