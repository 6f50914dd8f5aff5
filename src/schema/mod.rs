mod error;
mod grammar;

pub use error::GrammarError;
pub use grammar::{CandidateValidator, TypeGrammar, is_invalid};
