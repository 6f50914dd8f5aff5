use anyhow::{Context, Result};
use serde_json::Value;

use crate::form::SchemaEditor;

use super::{options::UiOptions, runtime::App};

/// Terminal schema builder. `run` blocks until the user saves or quits and
/// returns the saved schema document.
#[derive(Debug)]
pub struct AvroForm {
    editor: Option<SchemaEditor>,
    title: Option<String>,
    options: UiOptions,
}

impl Default for AvroForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AvroForm {
    /// Start from an empty editor of `UiOptions::editor`'s root kind.
    pub fn new() -> Self {
        Self {
            editor: None,
            title: None,
            options: UiOptions::default(),
        }
    }

    /// Start from an existing schema document.
    pub fn from_schema(schema: &Value) -> Result<Self> {
        let editor =
            SchemaEditor::from_value(schema).context("schema cannot be loaded into the editor")?;
        Ok(Self::new().with_editor(editor))
    }

    pub fn with_editor(mut self, editor: SchemaEditor) -> Self {
        self.editor = Some(editor);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(self) -> Result<Value> {
        let AvroForm {
            editor,
            title,
            options,
        } = self;
        let editor = editor.unwrap_or_else(|| SchemaEditor::new(options.editor));
        let title = title.unwrap_or_else(|| "avroform".to_string());
        App::new(editor, options, title).run()
    }
}
