use crate::domain::{ComplexKind, RowSeed, SchemaFragment};
use crate::schema::CandidateValidator;

use super::{
    actions::RowEvent,
    error::RowError,
    row::{RowEditor, SchemaRow},
    slot::validated,
};

/// Editor for `{"type": "enum", "symbols": [...]}`.
///
/// Blank symbol rows are editing placeholders and never reach the emission.
#[derive(Debug)]
pub struct EnumRow {
    symbols: Vec<String>,
    error: Option<String>,
    pending_mount: bool,
}

impl Default for EnumRow {
    fn default() -> Self {
        Self::mount(RowSeed::Default)
    }
}

impl EnumRow {
    pub fn mount(seed: RowSeed<'_>) -> Self {
        let symbols = seed
            .resolve()
            .and_then(|fragment| fragment.symbols().map(<[String]>::to_vec))
            .filter(|symbols| !symbols.is_empty())
            .unwrap_or_else(|| vec![String::new()]);
        Self {
            symbols,
            error: None,
            pending_mount: true,
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn set_symbol(
        &mut self,
        index: usize,
        value: &str,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let mut symbols = self.symbols.clone();
        *symbols.get_mut(index)? = value.to_string();
        let emitted = validated(&mut self.error, assemble(&symbols), validator)?;
        self.symbols = symbols;
        Some(emitted)
    }

    /// Insert after `index`. Blank values commit as placeholders without an
    /// emission; anything else is validated first.
    pub fn insert_symbol(
        &mut self,
        index: usize,
        value: &str,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        let at = index.saturating_add(1).min(self.symbols.len());
        if value.trim().is_empty() {
            self.symbols.insert(at, String::new());
            return None;
        }
        let mut symbols = self.symbols.clone();
        symbols.insert(at, value.to_string());
        let emitted = validated(&mut self.error, assemble(&symbols), validator)?;
        self.symbols = symbols;
        Some(emitted)
    }

    /// No-op on the last remaining symbol.
    pub fn remove_symbol(
        &mut self,
        index: usize,
        validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        if self.symbols.len() <= 1 || index >= self.symbols.len() {
            return None;
        }
        self.symbols.remove(index);
        validated(&mut self.error, assemble(&self.symbols), validator)
    }
}

fn assemble(symbols: &[String]) -> SchemaFragment {
    SchemaFragment::enumeration(
        symbols
            .iter()
            .filter(|symbol| !symbol.trim().is_empty())
            .cloned(),
    )
}

impl RowEditor for EnumRow {
    fn kind(&self) -> ComplexKind {
        ComplexKind::Enum
    }

    fn handle(
        &mut self,
        event: RowEvent,
        validator: &dyn CandidateValidator,
    ) -> Result<Option<SchemaFragment>, RowError> {
        let len = self.symbols.len();
        match event {
            RowEvent::SetSymbol { index, value } => {
                RowError::check_index("symbol", index, len)?;
                Ok(self.set_symbol(index, &value, validator))
            }
            RowEvent::InsertSymbol { index, value } => {
                RowError::check_index("symbol", index, len)?;
                Ok(self.insert_symbol(index, &value, validator))
            }
            RowEvent::RemoveSymbol { index } => {
                RowError::check_index("symbol", index, len)?;
                Ok(self.remove_symbol(index, validator))
            }
            other => Err(self.unsupported(&other)),
        }
    }

    fn on_child_change(
        &mut self,
        _slot: usize,
        _fragment: SchemaFragment,
        _validator: &dyn CandidateValidator,
    ) -> Option<SchemaFragment> {
        None
    }

    fn slot_count(&self) -> usize {
        0
    }

    fn child(&self, _slot: usize) -> Option<&SchemaRow> {
        None
    }

    fn child_mut(&mut self, _slot: usize) -> Option<&mut SchemaRow> {
        None
    }

    fn fragment(&self) -> Option<SchemaFragment> {
        Some(assemble(&self.symbols))
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn take_pending_mount(&mut self) -> bool {
        std::mem::take(&mut self.pending_mount)
    }
}
