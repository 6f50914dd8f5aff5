use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    actions::{Row, WranglerAction},
    store::WranglerStore,
};

/// Options handed to the delimited-text parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOptions {
    /// First line holds column names.
    pub header: bool,
    pub skip_empty_lines: bool,
    /// `None` lets the parser guess.
    pub delimiter: Option<String>,
}

/// Parser output: keyed rows when a header line was used, positional otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRows {
    Keyed(Vec<Row>),
    Positional(Vec<Vec<String>>),
}

pub trait DelimitedParser {
    fn parse(&self, input: &str, options: &ParseOptions) -> Result<ParsedRows>;
}

/// Key header-less rows as `column1..columnN`.
pub fn format_rows(parsed: ParsedRows) -> Vec<Row> {
    match parsed {
        ParsedRows::Keyed(rows) => rows,
        ParsedRows::Positional(rows) => rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .enumerate()
                    .map(|(index, cell)| (format!("column{}", index + 1), cell))
                    .collect()
            })
            .collect(),
    }
}

/// Parse pasted text and load it into the store. Returns the row count.
pub fn load_text(
    parser: &dyn DelimitedParser,
    store: &mut dyn WranglerStore,
    input: &str,
    options: &ParseOptions,
) -> Result<usize> {
    let parsed = parser
        .parse(input, options)
        .context("failed to parse delimited text")?;
    let data = format_rows(parsed);
    let rows = data.len();
    debug!(rows, header = options.header, "loading wrangler data");
    store
        .dispatch(WranglerAction::SetData { data })
        .context("transform store rejected setData")?;
    Ok(rows)
}
