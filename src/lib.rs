#![deny(rust_2018_idioms)]

pub mod domain;
pub mod form;
pub mod io;
pub mod schema;
pub mod wrangler;

#[cfg(feature = "tui")]
mod app;
#[cfg(feature = "tui")]
mod presentation;

#[cfg(test)]
mod tests;

#[cfg(feature = "tui")]
pub use app::{AvroForm, UiOptions};
pub use domain::{ComplexKind, Field, SchemaFragment};
pub use form::{EditorOptions, RowEvent, RowPath, SchemaEditor};
pub use io::DocumentFormat;
pub use schema::{CandidateValidator, GrammarError, TypeGrammar};

pub mod prelude {
    #[cfg(feature = "tui")]
    pub use super::{AvroForm, UiOptions};
    pub use super::{
        CandidateValidator, ComplexKind, DocumentFormat, EditorOptions, RowEvent, RowPath,
        SchemaEditor, SchemaFragment,
    };
}
