use std::path::Path;

use avroform::DocumentFormat;

/// What a file extension says about the document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Supported(DocumentFormat),
    /// Recognised, but the matching cargo feature is off in this build.
    FeatureOff(&'static str),
    Unrecognised,
}

pub fn probe(path: &Path) -> Probe {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return Probe::Unrecognised;
    };
    if let Some(format) = DocumentFormat::from_extension(extension) {
        return Probe::Supported(format);
    }
    match extension.to_ascii_lowercase().as_str() {
        "yaml" | "yml" => Probe::FeatureOff("yaml"),
        "toml" => Probe::FeatureOff("toml"),
        _ => Probe::Unrecognised,
    }
}

/// `json, yaml, toml` for whatever this build supports.
pub fn supported() -> String {
    DocumentFormat::available_formats()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn parse_format_arg(raw: &str) -> Result<DocumentFormat, String> {
    DocumentFormat::from_extension(raw)
        .ok_or_else(|| format!("unsupported format '{raw}'; this build supports {}", supported()))
}
