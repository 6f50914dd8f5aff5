use thiserror::Error;

use super::{
    actions::{SortOrder, WranglerAction},
    store::WranglerSnapshot,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("select a column first")]
    NoColumnSelected,
    #[error("no column action is open")]
    NoPanelOpen,
    #[error("{0} is required")]
    MissingInput(&'static str),
    #[error("{field} must be a non-negative integer, got '{value}'")]
    InvalidIndex { field: &'static str, value: String },
    #[error("there is no other column to merge with")]
    NothingToMerge,
}

/// Column actions that need extra input before they can be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPanel {
    Rename,
    Split,
    Merge,
    Substring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    Upper,
    Lower,
    Title,
}

/// Text typed into the open panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelInputs {
    pub new_name: String,
    pub delimiter: String,
    pub first_split: String,
    pub second_split: String,
    /// Defaults to the first merge candidate.
    pub merge_with: Option<String>,
    pub join_by: String,
    pub merged_column_name: String,
    pub begin_index: String,
    pub end_index: String,
    pub column_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub rows: usize,
    pub columns: usize,
    pub errors: usize,
}

impl Metrics {
    pub fn of(snapshot: &WranglerSnapshot) -> Self {
        Self {
            rows: snapshot.data.len(),
            columns: snapshot.headers_list.len(),
            errors: snapshot.error_count(),
        }
    }
}

/// Selection and panel state of the wrangling table. Builds actions; the
/// caller sends them to the store.
#[derive(Debug, Clone, Default)]
pub struct WrangleView {
    active_column: Option<String>,
    panel: Option<ColumnPanel>,
    inputs: PanelInputs,
}

impl WrangleView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_column(&mut self, column: impl Into<String>) {
        self.active_column = Some(column.into());
    }

    pub fn active_column(&self) -> Option<&str> {
        self.active_column.as_deref()
    }

    /// Open one panel, closing whichever was open and clearing its inputs.
    pub fn open_panel(&mut self, panel: ColumnPanel) {
        self.panel = Some(panel);
        self.inputs = PanelInputs::default();
    }

    pub fn close_panel(&mut self) {
        self.panel = None;
    }

    pub fn panel(&self) -> Option<ColumnPanel> {
        self.panel
    }

    pub fn inputs(&self) -> &PanelInputs {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut PanelInputs {
        &mut self.inputs
    }

    /// Columns the active column can be merged with, in table order.
    pub fn merge_candidates(&self, snapshot: &WranglerSnapshot) -> Vec<String> {
        let headers: Vec<&String> = match snapshot.data.first() {
            Some(row) => row.keys().collect(),
            None => snapshot.headers_list.iter().collect(),
        };
        headers
            .into_iter()
            .filter(|header| Some(header.as_str()) != self.active_column())
            .cloned()
            .collect()
    }

    pub fn drop_column(&self) -> Result<WranglerAction, ViewError> {
        Ok(WranglerAction::DropColumn {
            active_column: self.require_column()?,
        })
    }

    pub fn transform_case(&self, case: CaseTransform) -> Result<WranglerAction, ViewError> {
        let active_column = self.require_column()?;
        Ok(match case {
            CaseTransform::Upper => WranglerAction::UpperCaseColumn { active_column },
            CaseTransform::Lower => WranglerAction::LowerCaseColumn { active_column },
            CaseTransform::Title => WranglerAction::TitleCaseColumn { active_column },
        })
    }

    pub fn sort(&self, order: SortOrder) -> Result<WranglerAction, ViewError> {
        Ok(WranglerAction::SortColumn {
            active_column: self.require_column()?,
            order,
        })
    }

    /// Build the action for the open panel from its inputs.
    pub fn submit(&self, snapshot: &WranglerSnapshot) -> Result<WranglerAction, ViewError> {
        let active_column = self.require_column()?;
        let inputs = &self.inputs;
        match self.panel.ok_or(ViewError::NoPanelOpen)? {
            ColumnPanel::Rename => Ok(WranglerAction::RenameColumn {
                active_column,
                new_name: required(&inputs.new_name, "new name")?,
            }),
            ColumnPanel::Split => Ok(WranglerAction::SplitColumn {
                active_column,
                first_split: required(&inputs.first_split, "first split name")?,
                second_split: required(&inputs.second_split, "second split name")?,
                delimiter: if inputs.delimiter.is_empty() {
                    return Err(ViewError::MissingInput("split delimiter"));
                } else {
                    inputs.delimiter.clone()
                },
            }),
            ColumnPanel::Merge => {
                let merge_with = match &inputs.merge_with {
                    Some(column) => column.clone(),
                    None => self
                        .merge_candidates(snapshot)
                        .into_iter()
                        .next()
                        .ok_or(ViewError::NothingToMerge)?,
                };
                Ok(WranglerAction::MergeColumn {
                    active_column,
                    join_by: inputs.join_by.clone(),
                    merged_column_name: required(
                        &inputs.merged_column_name,
                        "merged column name",
                    )?,
                    merge_with,
                })
            }
            ColumnPanel::Substring => Ok(WranglerAction::SubStringColumn {
                active_column,
                begin_index: index(&inputs.begin_index, "begin index")?,
                end_index: index(&inputs.end_index, "end index")?,
                column_name: required(&inputs.column_name, "new column name")?,
            }),
        }
    }

    fn require_column(&self) -> Result<String, ViewError> {
        self.active_column
            .clone()
            .ok_or(ViewError::NoColumnSelected)
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ViewError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ViewError::MissingInput(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn index(value: &str, field: &'static str) -> Result<usize, ViewError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ViewError::MissingInput(field));
    }
    trimmed.parse().map_err(|_| ViewError::InvalidIndex {
        field,
        value: value.to_string(),
    })
}
