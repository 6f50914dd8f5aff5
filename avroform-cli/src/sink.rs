use std::path::PathBuf;

use avroform::{
    DocumentFormat,
    io::{OutputDestination, OutputOptions},
};

use crate::formats::{self, Probe};
use crate::problems::{Problems, Stage};

/// Output flags as given on the command line.
#[derive(Debug, Default)]
pub struct OutputRequest<'a> {
    pub destinations: &'a [String],
    pub format: Option<DocumentFormat>,
    /// Format named by the input file's extension.
    pub input_format: Option<DocumentFormat>,
    pub pretty: bool,
    pub force: bool,
}

/// Turn the output flags into writer options. Stdout when nothing is given.
pub fn plan(request: &OutputRequest<'_>, problems: &mut Problems) -> Option<OutputOptions> {
    let before = problems.count(Stage::Output);

    let mut destinations = Vec::new();
    for raw in request.destinations {
        if raw.trim().is_empty() {
            problems.report(Stage::Output, "output destination cannot be empty");
        } else {
            destinations.push(OutputDestination::parse(raw));
        }
    }
    if request.destinations.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }

    let files: Vec<PathBuf> = destinations
        .iter()
        .filter_map(|destination| match destination {
            OutputDestination::File(path) => Some(path.clone()),
            OutputDestination::Stdout => None,
        })
        .collect();

    let format = match request.format {
        Some(format) => format,
        None if files.is_empty() => request.input_format.unwrap_or_default(),
        None => agree_on_format(&files, problems).unwrap_or_default(),
    };

    if !request.force {
        for path in files.iter().filter(|path| path.exists()) {
            problems.report(
                Stage::Output,
                format!("{} already exists (pass --force to overwrite)", path.display()),
            );
        }
    }

    if problems.count(Stage::Output) > before {
        return None;
    }
    Some(
        OutputOptions::new(format)
            .with_pretty(request.pretty)
            .with_overwrite(request.force)
            .with_destinations(destinations),
    )
}

/// Every output file must name the same format.
fn agree_on_format(files: &[PathBuf], problems: &mut Problems) -> Option<DocumentFormat> {
    let mut agreed: Option<DocumentFormat> = None;
    for path in files {
        match formats::probe(path) {
            Probe::Supported(format) => match agreed {
                None => agreed = Some(format),
                Some(existing) if existing != format => problems.report(
                    Stage::Output,
                    format!(
                        "{} is {format} but earlier outputs are {existing}; pass --format",
                        path.display()
                    ),
                ),
                Some(_) => {}
            },
            Probe::FeatureOff(feature) => problems.report(
                Stage::Output,
                format!(
                    "{} needs the '{feature}' feature, which this build lacks",
                    path.display()
                ),
            ),
            Probe::Unrecognised => problems.report(
                Stage::Output,
                format!(
                    "cannot tell the format of {}; use a .json/.avsc/.yaml/.toml name or pass --format",
                    path.display()
                ),
            ),
        }
    }
    agreed
}
