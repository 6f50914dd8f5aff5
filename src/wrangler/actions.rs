use std::collections::BTreeMap;

use indexmap::IndexMap;
use schemars::{JsonSchema, schema::RootSchema, schema_for};
use serde::{Deserialize, Serialize};

/// One table row keyed by column header, in column order.
pub type Row = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Requests sent to the transform store. Serialized as `{"type", "payload"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum WranglerAction {
    /// Replace the table with freshly parsed rows.
    SetData {
        #[schemars(with = "Vec<BTreeMap<String, String>>")]
        data: Vec<Row>,
    },
    #[serde(rename_all = "camelCase")]
    DropColumn { active_column: String },
    #[serde(rename_all = "camelCase")]
    RenameColumn {
        active_column: String,
        new_name: String,
    },
    /// Split on the first occurrence of `delimiter` into two new columns.
    #[serde(rename_all = "camelCase")]
    SplitColumn {
        active_column: String,
        first_split: String,
        second_split: String,
        delimiter: String,
    },
    #[serde(rename_all = "camelCase")]
    MergeColumn {
        active_column: String,
        join_by: String,
        merged_column_name: String,
        merge_with: String,
    },
    #[serde(rename_all = "camelCase")]
    UpperCaseColumn { active_column: String },
    #[serde(rename_all = "camelCase")]
    LowerCaseColumn { active_column: String },
    #[serde(rename_all = "camelCase")]
    TitleCaseColumn { active_column: String },
    #[serde(rename_all = "camelCase")]
    SubStringColumn {
        active_column: String,
        begin_index: usize,
        end_index: usize,
        column_name: String,
    },
    #[serde(rename_all = "camelCase")]
    SortColumn {
        active_column: String,
        order: SortOrder,
    },
}

impl WranglerAction {
    /// The wire `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            WranglerAction::SetData { .. } => "setData",
            WranglerAction::DropColumn { .. } => "dropColumn",
            WranglerAction::RenameColumn { .. } => "renameColumn",
            WranglerAction::SplitColumn { .. } => "splitColumn",
            WranglerAction::MergeColumn { .. } => "mergeColumn",
            WranglerAction::UpperCaseColumn { .. } => "upperCaseColumn",
            WranglerAction::LowerCaseColumn { .. } => "lowerCaseColumn",
            WranglerAction::TitleCaseColumn { .. } => "titleCaseColumn",
            WranglerAction::SubStringColumn { .. } => "subStringColumn",
            WranglerAction::SortColumn { .. } => "sortColumn",
        }
    }
}

/// JSON Schema describing every action the view can send.
pub fn action_vocabulary_schema() -> RootSchema {
    schema_for!(WranglerAction)
}
