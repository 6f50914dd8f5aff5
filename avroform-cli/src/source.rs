use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use avroform::{DocumentFormat, io::parse_document_str};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde_json::Value;
use tracing::debug;

use crate::formats::{self, Probe};
use crate::problems::{Problems, Stage};

/// Where `--schema` points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Stdin,
    File(PathBuf),
    /// Text that names no existing file is taken as the document itself.
    Inline(String),
}

impl SchemaSource {
    pub fn locate(spec: &str) -> Self {
        if spec == "-" {
            SchemaSource::Stdin
        } else if Path::new(spec).is_file() {
            SchemaSource::File(PathBuf::from(spec))
        } else {
            SchemaSource::Inline(spec.to_string())
        }
    }

    fn describe(&self) -> String {
        match self {
            SchemaSource::Stdin => "stdin".to_string(),
            SchemaSource::File(path) => path.display().to_string(),
            SchemaSource::Inline(_) => "inline schema".to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            SchemaSource::Stdin => {
                let mut contents = String::new();
                io::stdin()
                    .read_to_string(&mut contents)
                    .wrap_err("failed to read schema from stdin")?;
                Ok(contents)
            }
            SchemaSource::File(path) => fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display())),
            SchemaSource::Inline(text) => Ok(text.clone()),
        }
    }
}

/// Read `--schema`, recording failures instead of stopping at the first.
///
/// Returns the decoded document together with the format its extension
/// named, if any.
pub fn load(spec: &str, problems: &mut Problems) -> (Option<Value>, Option<DocumentFormat>) {
    let source = SchemaSource::locate(spec);
    let named = match &source {
        SchemaSource::File(path) => match formats::probe(path) {
            Probe::Supported(format) => Some(format),
            Probe::FeatureOff(feature) => {
                problems.report(
                    Stage::Input,
                    format!(
                        "{} needs the '{feature}' feature, which this build lacks",
                        path.display()
                    ),
                );
                return (None, None);
            }
            Probe::Unrecognised => None,
        },
        _ => None,
    };
    debug!(source = %source.describe(), ?named, "loading schema");

    let decoded = source
        .read()
        .and_then(|contents| decode(&contents, named.unwrap_or_default(), &source.describe()));
    match decoded {
        Ok(value) => (Some(value), named),
        Err(err) => {
            problems.report(Stage::Input, format!("{err:#}"));
            (None, named)
        }
    }
}

/// Decode with `preferred`, falling back to each other compiled-in format.
fn decode(contents: &str, preferred: DocumentFormat, origin: &str) -> Result<Value> {
    let first_error = match parse_document_str(contents, preferred) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    DocumentFormat::available_formats()
        .into_iter()
        .filter(|format| *format != preferred)
        .find_map(|format| parse_document_str(contents, format).ok())
        .ok_or_else(|| {
            eyre!(
                "could not read {origin} as any of {} ({preferred}: {first_error:#})",
                formats::supported()
            )
        })
}
