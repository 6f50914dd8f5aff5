mod view_tests;

use crate::wrangler::{Row, WranglerSnapshot};

fn row(cells: &[(&str, &str)]) -> Row {
    cells
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn snapshot() -> WranglerSnapshot {
    WranglerSnapshot {
        headers_list: vec!["first".into(), "last".into(), "age".into()],
        data: vec![
            row(&[("first", "ada"), ("last", "lovelace"), ("age", "36")]),
            row(&[("first", "alan"), ("last", "turing"), ("age", "x")]),
        ],
        ..WranglerSnapshot::default()
    }
}
