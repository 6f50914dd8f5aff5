mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{load_schema_file, parse_document_str, parse_schema_str, parse_schema_value};
pub use output::{OutputDestination, OutputOptions, emit, render_document};
