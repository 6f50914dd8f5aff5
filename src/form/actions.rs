use std::fmt;

/// Edits a row editor understands. Which variants apply depends on the
/// editor's kind; the rest are rejected with `RowError::Unsupported`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    /// Pick a type for a slot (array items, map keys/values, a field, a variant).
    SetType { slot: usize, type_name: String },
    SetNullable { slot: usize, nullable: bool },
    /// Rename a record field.
    SetName { slot: usize, name: String },
    SetSymbol { index: usize, value: String },
    /// Insert a symbol after `index`.
    InsertSymbol { index: usize, value: String },
    RemoveSymbol { index: usize },
    /// Insert a default field or variant after `after`.
    AddEntry { after: usize },
    RemoveEntry { index: usize },
}

impl RowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RowEvent::SetType { .. } => "set-type",
            RowEvent::SetNullable { .. } => "set-nullable",
            RowEvent::SetName { .. } => "set-name",
            RowEvent::SetSymbol { .. } => "set-symbol",
            RowEvent::InsertSymbol { .. } => "insert-symbol",
            RowEvent::RemoveSymbol { .. } => "remove-symbol",
            RowEvent::AddEntry { .. } => "add-entry",
            RowEvent::RemoveEntry { .. } => "remove-entry",
        }
    }
}

/// Address of a nested editor as slot indices from the root editor.
///
/// Array items live in slot 0, map keys and values in slots 0 and 1, record
/// fields and union variants in their list position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RowPath(Vec<usize>);

impl RowPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, slot: usize) -> Self {
        let mut slots = self.0.clone();
        slots.push(slot);
        Self(slots)
    }

    pub fn slots(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<usize>> for RowPath {
    fn from(slots: Vec<usize>) -> Self {
        Self(slots)
    }
}

impl<const N: usize> From<[usize; N]> for RowPath {
    fn from(slots: [usize; N]) -> Self {
        Self(slots.to_vec())
    }
}

impl fmt::Display for RowPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for slot in &self.0 {
            write!(f, "/{slot}")?;
        }
        Ok(())
    }
}
