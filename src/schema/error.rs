use thiserror::Error;

/// Reasons a schema candidate is rejected.
///
/// The `Display` text is the message editors surface next to the failing row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// The value could not be read as a type at all.
    #[error("{0}")]
    Malformed(String),
    /// The value was rejected by the embedded grammar.
    #[error("{0}")]
    Shape(String),
    #[error(
        "invalid name '{0}': names start with a letter or underscore and contain only letters, digits and underscores"
    )]
    InvalidName(String),
    #[error("record '{record}' declares field '{field}' more than once")]
    DuplicateField { record: String, field: String },
    #[error("record name '{0}' is defined more than once")]
    DuplicateRecord(String),
    #[error("union contains more than one '{0}' member")]
    DuplicateUnionMember(String),
    #[error("unions may only nest the nullable form [T, \"null\"]")]
    NestedUnion,
}
