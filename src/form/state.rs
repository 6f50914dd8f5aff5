use std::sync::Arc;

use anyhow::{Result, bail};
use serde_json::Value;
use tracing::debug;

use crate::domain::{ComplexKind, RowSeed, SchemaFragment, is_complex, parse_type};
use crate::schema::{CandidateValidator, TypeGrammar};

use super::{
    actions::{RowEvent, RowPath},
    array::ArrayRow,
    enumeration::EnumRow,
    error::RowError,
    map::MapRow,
    record::RecordRow,
    reducers::SchemaEngine,
    row::{RowEditor, SchemaRow, render},
    slot::TypeSlot,
    union::UnionRow,
};

type Listener = Box<dyn FnMut(&SchemaFragment)>;

/// Host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    /// Kind of the root editor for a fresh schema.
    pub root: ComplexKind,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            root: ComplexKind::Record,
        }
    }
}

impl EditorOptions {
    pub fn with_root(mut self, root: ComplexKind) -> Self {
        self.root = root;
        self
    }
}

/// What an outline line edits inside its owning editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTarget {
    Field(usize),
    Items,
    Keys,
    Values,
    Variant(usize),
    Symbol(usize),
}

impl LineTarget {
    /// Slot or list index events for this line carry.
    pub fn index(self) -> usize {
        match self {
            LineTarget::Field(index) | LineTarget::Variant(index) | LineTarget::Symbol(index) => {
                index
            }
            LineTarget::Items | LineTarget::Keys => 0,
            LineTarget::Values => 1,
        }
    }

    pub fn has_type(self) -> bool {
        !matches!(self, LineTarget::Symbol(_))
    }

    pub fn is_named(self) -> bool {
        matches!(self, LineTarget::Field(_) | LineTarget::Symbol(_))
    }

    pub fn is_list_entry(self) -> bool {
        matches!(
            self,
            LineTarget::Field(_) | LineTarget::Variant(_) | LineTarget::Symbol(_)
        )
    }
}

/// One renderable line of the editor tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineLine {
    /// Path of the editor that owns this line.
    pub path: RowPath,
    pub target: LineTarget,
    pub depth: usize,
    pub label: String,
    /// Picker value; `None` for enum symbols.
    pub type_name: Option<String>,
    pub nullable: bool,
    /// Set on the first line of an editor that is showing a rejection.
    pub error: Option<String>,
}

/// Owns the root editor and forwards every root emission to a listener.
pub struct SchemaEditor {
    root: SchemaRow,
    validator: Arc<dyn CandidateValidator>,
    listener: Option<Listener>,
    last: Option<SchemaFragment>,
    dirty: bool,
}

impl std::fmt::Debug for SchemaEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaEditor")
            .field("root", &self.root)
            .field("last", &self.last)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl Default for SchemaEditor {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl SchemaEditor {
    pub fn new(options: EditorOptions) -> Self {
        let root = match options.root {
            ComplexKind::Record => SchemaRow::Record(RecordRow::default()),
            ComplexKind::Array => SchemaRow::Array(ArrayRow::default()),
            ComplexKind::Map => SchemaRow::Map(MapRow::default()),
            ComplexKind::Enum => SchemaRow::Enum(EnumRow::default()),
            ComplexKind::Union => SchemaRow::Union(UnionRow::default()),
        };
        Self::with_root(root)
    }

    /// Seed the editor from an external schema document.
    pub fn from_value(value: &Value) -> Result<Self> {
        let fragment = TypeGrammar::shared().check_document(value)?;
        Self::from_fragment(&fragment)
    }

    /// Seed the editor from a fragment. The root must be a complex type;
    /// a nullable wrapper around a complex root is dropped, while `[T, "null"]`
    /// over a primitive is a union root.
    pub fn from_fragment(fragment: &SchemaFragment) -> Result<Self> {
        let parsed = parse_type(fragment);
        let (type_name, seed) = if is_complex(&parsed.display_type) {
            (parsed.display_type.as_str(), &parsed.fragment)
        } else {
            (fragment.type_name(), fragment)
        };
        let Some(root) = render(type_name, RowSeed::Fragment(seed)) else {
            bail!(
                "root type must be one of record, array, map, enum or union, found '{type_name}'"
            );
        };
        Ok(Self::with_root(root))
    }

    fn with_root(root: SchemaRow) -> Self {
        Self {
            root,
            validator: TypeGrammar::shared(),
            listener: None,
            last: None,
            dirty: false,
        }
    }

    pub fn with_validator(mut self, validator: Arc<dyn CandidateValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn on_change(&mut self, listener: impl FnMut(&SchemaFragment) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn root(&self) -> &SchemaRow {
        &self.root
    }

    pub fn validator(&self) -> &dyn CandidateValidator {
        self.validator.as_ref()
    }

    /// Last schema handed to the listener.
    pub fn schema(&self) -> Option<&SchemaFragment> {
        self.last.as_ref()
    }

    /// The root's current emission shape, validated now.
    pub fn current(&self) -> Option<SchemaFragment> {
        let fragment = self.root.fragment()?;
        self.validator.validate(&fragment).ok()?;
        Some(fragment)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn dispatch(
        &mut self,
        path: &RowPath,
        event: RowEvent,
    ) -> Result<Option<SchemaFragment>, RowError> {
        let emission = SchemaEngine::new(&mut self.root, self.validator.as_ref())
            .dispatch(path, event)?;
        if let Some(fragment) = &emission {
            self.publish(fragment.clone());
        }
        Ok(emission)
    }

    /// Flush pending mount emissions. Call after every render pass.
    pub fn settle(&mut self) -> Option<SchemaFragment> {
        let emission = SchemaEngine::new(&mut self.root, self.validator.as_ref()).settle();
        if let Some(fragment) = &emission {
            self.publish(fragment.clone());
        }
        emission
    }

    pub fn row_at(&self, path: &RowPath) -> Option<&SchemaRow> {
        path.slots()
            .iter()
            .try_fold(&self.root, |row, &slot| row.child(slot))
    }

    /// Every editor currently showing a rejection, in display order.
    pub fn errors(&self) -> Vec<(RowPath, String)> {
        let mut errors = Vec::new();
        collect_errors(&self.root, RowPath::root(), &mut errors);
        errors
    }

    pub fn outline(&self) -> Vec<OutlineLine> {
        let mut lines = Vec::new();
        outline_row(&self.root, &RowPath::root(), &mut lines);
        lines
    }

    fn publish(&mut self, fragment: SchemaFragment) {
        debug!(schema = %fragment, "schema emitted");
        if let Some(listener) = self.listener.as_mut() {
            listener(&fragment);
        }
        self.last = Some(fragment);
        self.dirty = true;
    }
}

fn collect_errors(row: &SchemaRow, path: RowPath, errors: &mut Vec<(RowPath, String)>) {
    if let Some(message) = row.error() {
        errors.push((path.clone(), message.to_string()));
    }
    for slot in 0..row.slot_count() {
        if let Some(child) = row.child(slot) {
            collect_errors(child, path.child(slot), errors);
        }
    }
}

fn outline_row(row: &SchemaRow, path: &RowPath, lines: &mut Vec<OutlineLine>) {
    let depth = path.depth();
    let first = lines.len();
    match row {
        SchemaRow::Record(record) => {
            for (index, field) in record.fields().iter().enumerate() {
                let label = if field.name().is_empty() {
                    "<unnamed>".to_string()
                } else {
                    field.name().to_string()
                };
                push_slot(lines, path, LineTarget::Field(index), depth, label, field.slot());
            }
        }
        SchemaRow::Array(array) => {
            push_slot(lines, path, LineTarget::Items, depth, "items".into(), array.items());
        }
        SchemaRow::Map(map) => {
            push_slot(lines, path, LineTarget::Keys, depth, "keys".into(), map.keys());
            push_slot(lines, path, LineTarget::Values, depth, "values".into(), map.values());
        }
        SchemaRow::Enum(enumeration) => {
            for (index, symbol) in enumeration.symbols().iter().enumerate() {
                lines.push(OutlineLine {
                    path: path.clone(),
                    target: LineTarget::Symbol(index),
                    depth,
                    label: symbol.clone(),
                    type_name: None,
                    nullable: false,
                    error: None,
                });
            }
        }
        SchemaRow::Union(union) => {
            for (index, variant) in union.variants().iter().enumerate() {
                let label = format!("variant {}", index + 1);
                push_slot(lines, path, LineTarget::Variant(index), depth, label, variant.slot());
            }
        }
    }
    if let Some(message) = row.error()
        && let Some(line) = lines.get_mut(first)
    {
        line.error = Some(message.to_string());
    }
}

fn push_slot(
    lines: &mut Vec<OutlineLine>,
    path: &RowPath,
    target: LineTarget,
    depth: usize,
    label: String,
    slot: &TypeSlot,
) {
    lines.push(OutlineLine {
        path: path.clone(),
        target,
        depth,
        label,
        type_name: Some(slot.display_type().to_string()),
        nullable: slot.nullable(),
        error: None,
    });
    if let Some(child) = slot.child() {
        outline_row(child, &path.child(target.index()), lines);
    }
}
