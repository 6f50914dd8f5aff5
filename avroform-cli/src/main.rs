use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde_json::Value;
use tracing::{debug, info};

use avroform::{
    AvroForm, ComplexKind, DocumentFormat, EditorOptions, UiOptions,
    io::{emit, parse_schema_value},
    wrangler::action_vocabulary_schema,
};

mod formats;
mod logging;
mod problems;
mod sink;
mod source;

use problems::Problems;
use sink::OutputRequest;

#[derive(Debug, Parser)]
#[command(
    name = "avroform",
    version,
    about = "Build record/array/map/enum/union schemas in the terminal"
)]
struct Cli {
    /// Schema to start from: file path, inline document, or "-" for stdin
    #[arg(short = 's', long = "schema", value_name = "SPEC")]
    schema: Option<String>,

    /// Root type of a fresh schema (ignored with --schema)
    #[arg(short = 'r', long = "root", value_name = "TYPE", default_value = "record", value_parser = parse_root)]
    root: ComplexKind,

    /// Title shown at the top of the editor
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Where to write the result ("-" is stdout); repeatable
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Output format; inferred from output file extensions when omitted
    #[arg(long = "format", value_name = "FORMAT", value_parser = formats::parse_format_arg)]
    format: Option<DocumentFormat>,

    /// Write compact JSON/TOML
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Replace output files that already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Validate --schema and write it out without opening the editor
    #[arg(long = "check", requires = "schema")]
    check: bool,

    /// Print the JSON Schema of the wrangling action vocabulary and exit
    #[arg(long = "print-actions", conflicts_with_all = ["schema", "check"])]
    print_actions: bool,

    /// Write logs to this file (filter with RUST_LOG, default info)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        logging::init(path)?;
    }

    if cli.print_actions {
        let vocabulary = serde_json::to_string_pretty(&action_vocabulary_schema())
            .wrap_err("failed to serialize the action vocabulary")?;
        println!("{vocabulary}");
        return Ok(());
    }

    let mut problems = Problems::default();
    let (document, input_format) = match cli.schema.as_deref() {
        Some(spec) => source::load(spec, &mut problems),
        None => (None, None),
    };
    let output = sink::plan(
        &OutputRequest {
            destinations: &cli.outputs,
            format: cli.format,
            input_format,
            pretty: !cli.no_pretty,
            force: cli.force,
        },
        &mut problems,
    );
    problems.finish()?;

    let schema = if cli.check {
        check(document)?
    } else {
        edit(&cli, document)?
    };

    if let Some(options) = output {
        debug!(format = %options.format, destinations = options.destinations.len(), "writing schema");
        emit(&schema, &options).map_err(|err| eyre!("{err:#}"))?;
    }
    Ok(())
}

fn check(document: Option<Value>) -> Result<Value> {
    let document = document.ok_or_else(|| eyre!("--check needs --schema"))?;
    let fragment = parse_schema_value(&document).map_err(|err| eyre!("{err:#}"))?;
    info!(schema = %fragment, "schema is valid");
    Ok(fragment.to_value())
}

fn edit(cli: &Cli, document: Option<Value>) -> Result<Value> {
    let form = match document {
        Some(document) => AvroForm::from_schema(&document).map_err(|err| eyre!("{err:#}"))?,
        None => AvroForm::new(),
    };
    let editor = EditorOptions::default().with_root(cli.root);
    let mut form = form.with_options(UiOptions::default().with_editor(editor));
    if let Some(title) = &cli.title {
        form = form.with_title(title.clone());
    }
    form.run().map_err(|err| eyre!("{err:#}"))
}

fn parse_root(raw: &str) -> Result<ComplexKind, String> {
    ComplexKind::from_type_name(&raw.to_ascii_lowercase())
        .ok_or_else(|| format!("'{raw}' is not one of record, array, map, enum, union"))
}
