use std::fmt;

/// What the footer reports about the last interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum Status {
    #[default]
    Ready,
    Editing(String),
    Picking,
    Updated,
    Rejected(String),
    /// A nested editor has not produced a type yet.
    Incomplete,
    Issues(usize),
    ConfirmExit,
    Saved,
    Notice(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => f.write_str("Ready. Press Ctrl+S to save the schema."),
            Status::Editing(label) => write!(f, "Editing {label}"),
            Status::Picking => f.write_str("Use ↑/↓ and Enter to choose a type"),
            Status::Updated => f.write_str("Schema updated"),
            Status::Rejected(reason) => write!(f, "Rejected: {reason}"),
            Status::Incomplete => {
                f.write_str("Schema is incomplete; finish the nested types first")
            }
            Status::Issues(count) => write!(f, "{count} issue(s) remaining"),
            Status::ConfirmExit => {
                f.write_str("Unsaved changes. Press Ctrl+Q again to quit without saving.")
            }
            Status::Saved => f.write_str("Schema saved"),
            Status::Notice(text) => f.write_str(text),
        }
    }
}
