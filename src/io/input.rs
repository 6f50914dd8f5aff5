use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::{domain::SchemaFragment, schema::TypeGrammar};

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Parse a document and check it against the type grammar.
pub fn parse_schema_str(contents: &str, format: DocumentFormat) -> Result<SchemaFragment> {
    let document = parse_document_str(contents, format)?;
    parse_schema_value(&document)
}

pub fn parse_schema_value(document: &Value) -> Result<SchemaFragment> {
    TypeGrammar::shared()
        .check_document(document)
        .context("document is not a valid schema")
}

/// Read a schema file, picking the format from its extension (JSON otherwise).
pub fn load_schema_file(path: &Path) -> Result<SchemaFragment> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    let format = DocumentFormat::from_path(path).unwrap_or_default();
    parse_schema_str(&contents, format)
        .with_context(|| format!("failed to load schema from {}", path.display()))
}
