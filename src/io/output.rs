use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::DocumentFormat;

/// Where a finished schema is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }

    /// `-` means stdout; anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        if raw == "-" {
            OutputDestination::Stdout
        } else {
            OutputDestination::file(raw)
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    /// Replace existing files instead of refusing to write.
    pub overwrite: bool,
    pub destinations: Vec<OutputDestination>,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            overwrite: false,
            destinations: vec![OutputDestination::Stdout],
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }

    /// Files that already exist and would block a write without `overwrite`.
    pub fn blocked_files(&self) -> Vec<&Path> {
        if self.overwrite {
            return Vec::new();
        }
        self.destinations
            .iter()
            .filter_map(|destination| match destination {
                OutputDestination::File(path) if path.exists() => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

/// Serialize a document in the requested format.
pub fn render_document(value: &Value, format: DocumentFormat, pretty: bool) -> Result<String> {
    match format {
        DocumentFormat::Json => {
            if pretty {
                serde_json::to_string_pretty(value).context("failed to serialize JSON")
            } else {
                serde_json::to_string(value).context("failed to serialize JSON")
            }
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(value).context("failed to serialize YAML"),
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => {
            // TOML documents need a table at the top; bare type names and
            // unions cannot be written.
            if !value.is_object() {
                bail!("TOML output needs a record, array, map or enum at the root");
            }
            if pretty {
                toml::to_string_pretty(value).context("failed to serialize TOML")
            } else {
                toml::to_string(value).context("failed to serialize TOML")
            }
        }
    }
}

/// Write the finished schema to every configured destination.
pub fn emit(value: &Value, options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        return Ok(());
    }
    if let Some(path) = options.blocked_files().first() {
        bail!(
            "file {} already exists (pass --force to overwrite)",
            path.display()
        );
    }
    let payload = render_document(value, options.format, options.pretty)?;
    for destination in &options.destinations {
        write_payload(destination, &payload, options.overwrite).with_context(
            || match destination {
                OutputDestination::Stdout => "failed to write to stdout".to_string(),
                OutputDestination::File(path) => {
                    format!("failed to write to file {}", path.display())
                }
            },
        )?;
    }
    Ok(())
}

fn write_payload(destination: &OutputDestination, payload: &str, overwrite: bool) -> Result<()> {
    match destination {
        OutputDestination::Stdout => {
            let mut stdout = io::stdout();
            stdout
                .write_all(payload.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .context("failed to flush stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
        OutputDestination::File(path) => {
            let mut file = if overwrite {
                File::create(path)?
            } else {
                OpenOptions::new().write(true).create_new(true).open(path)?
            };
            file.write_all(payload.as_bytes())?;
            file.write_all(b"\n")?;
            file.flush()?;
            Ok(())
        }
    }
}
