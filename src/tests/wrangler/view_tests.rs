use crate::wrangler::{
    CaseTransform, ColumnErrors, ColumnPanel, Metrics, SortOrder, ViewError, WrangleView,
    WranglerAction, WranglerSnapshot,
};

use super::snapshot;

fn view_on(column: &str) -> WrangleView {
    let mut view = WrangleView::new();
    view.select_column(column);
    view
}

#[test]
fn column_actions_need_a_selection() {
    let view = WrangleView::new();
    assert_eq!(view.drop_column(), Err(ViewError::NoColumnSelected));
    assert_eq!(
        view.sort(SortOrder::Ascending),
        Err(ViewError::NoColumnSelected)
    );
}

#[test]
fn one_click_actions() {
    let view = view_on("last");
    assert_eq!(
        view.drop_column(),
        Ok(WranglerAction::DropColumn {
            active_column: "last".into()
        })
    );
    assert_eq!(
        view.transform_case(CaseTransform::Title),
        Ok(WranglerAction::TitleCaseColumn {
            active_column: "last".into()
        })
    );
    assert_eq!(
        view.sort(SortOrder::Descending),
        Ok(WranglerAction::SortColumn {
            active_column: "last".into(),
            order: SortOrder::Descending
        })
    );
}

#[test]
fn submit_without_a_panel_is_an_error() {
    let view = view_on("first");
    assert_eq!(view.submit(&snapshot()), Err(ViewError::NoPanelOpen));
}

#[test]
fn rename_trims_the_new_name() {
    let mut view = view_on("first");
    view.open_panel(ColumnPanel::Rename);
    assert_eq!(
        view.submit(&snapshot()),
        Err(ViewError::MissingInput("new name"))
    );
    view.inputs_mut().new_name = "  given ".into();
    assert_eq!(
        view.submit(&snapshot()),
        Ok(WranglerAction::RenameColumn {
            active_column: "first".into(),
            new_name: "given".into()
        })
    );
}

#[test]
fn split_keeps_whitespace_delimiters() {
    let mut view = view_on("first");
    view.open_panel(ColumnPanel::Split);
    let inputs = view.inputs_mut();
    inputs.first_split = "a".into();
    inputs.second_split = "b".into();
    inputs.delimiter = " ".into();
    assert_eq!(
        view.submit(&snapshot()),
        Ok(WranglerAction::SplitColumn {
            active_column: "first".into(),
            first_split: "a".into(),
            second_split: "b".into(),
            delimiter: " ".into()
        })
    );
}

#[test]
fn merge_defaults_to_the_first_other_column() {
    let snapshot = snapshot();
    let mut view = view_on("first");
    assert_eq!(view.merge_candidates(&snapshot), ["last", "age"]);

    view.open_panel(ColumnPanel::Merge);
    view.inputs_mut().merged_column_name = "full".into();
    view.inputs_mut().join_by = " ".into();
    assert_eq!(
        view.submit(&snapshot),
        Ok(WranglerAction::MergeColumn {
            active_column: "first".into(),
            join_by: " ".into(),
            merged_column_name: "full".into(),
            merge_with: "last".into()
        })
    );

    view.inputs_mut().merge_with = Some("age".into());
    let Ok(WranglerAction::MergeColumn { merge_with, .. }) = view.submit(&snapshot) else {
        panic!("expected a merge action");
    };
    assert_eq!(merge_with, "age");
}

#[test]
fn merge_needs_another_column() {
    let snapshot = WranglerSnapshot {
        headers_list: vec!["only".into()],
        ..WranglerSnapshot::default()
    };
    let mut view = view_on("only");
    view.open_panel(ColumnPanel::Merge);
    view.inputs_mut().merged_column_name = "x".into();
    assert_eq!(view.submit(&snapshot), Err(ViewError::NothingToMerge));
}

#[test]
fn substring_indices_must_be_numbers() {
    let mut view = view_on("last");
    view.open_panel(ColumnPanel::Substring);
    let inputs = view.inputs_mut();
    inputs.begin_index = "1".into();
    inputs.end_index = "three".into();
    inputs.column_name = "part".into();
    assert_eq!(
        view.submit(&snapshot()),
        Err(ViewError::InvalidIndex {
            field: "end index",
            value: "three".into()
        })
    );

    view.inputs_mut().end_index = " 3 ".into();
    assert_eq!(
        view.submit(&snapshot()),
        Ok(WranglerAction::SubStringColumn {
            active_column: "last".into(),
            begin_index: 1,
            end_index: 3,
            column_name: "part".into()
        })
    );
}

#[test]
fn opening_a_panel_clears_previous_inputs() {
    let mut view = view_on("last");
    view.open_panel(ColumnPanel::Rename);
    view.inputs_mut().new_name = "x".into();
    view.open_panel(ColumnPanel::Split);
    assert_eq!(view.panel(), Some(ColumnPanel::Split));
    assert!(view.inputs().new_name.is_empty());
    view.close_panel();
    assert_eq!(view.panel(), None);
}

#[test]
fn metrics_count_errors_on_current_headers_only() {
    let mut snapshot = snapshot();
    snapshot.errors.insert(
        "age".into(),
        ColumnErrors {
            count: 1,
            rows: [1].into_iter().collect(),
        },
    );
    snapshot.errors.insert(
        "dropped".into(),
        ColumnErrors {
            count: 5,
            rows: Default::default(),
        },
    );
    assert_eq!(
        Metrics::of(&snapshot),
        Metrics {
            rows: 2,
            columns: 3,
            errors: 1
        }
    );
    assert!(snapshot.has_error("age", 1));
    assert!(!snapshot.has_error("age", 0));
}
