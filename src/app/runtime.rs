use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    form::{LineTarget, OutlineLine, RowEditor, RowEvent, RowPath, SchemaEditor, SchemaRow},
    presentation::{self, PromptRender, UiContext},
};

use super::{
    input::{KeyAction, TextEdit, text_edit},
    keymap::{self, KeymapContext},
    options::UiOptions,
    popup::{PopupState, TextPrompt},
    status::Status,
    terminal::TerminalSession,
};

pub(crate) struct App {
    editor: SchemaEditor,
    options: UiOptions,
    title: String,
    status: Status,
    selected: usize,
    exit_armed: bool,
    should_quit: bool,
    result: Option<Value>,
    popup: Option<PopupState>,
    prompt: Option<TextPrompt>,
}

impl App {
    pub(crate) fn new(editor: SchemaEditor, options: UiOptions, title: String) -> Self {
        Self {
            editor,
            options,
            title,
            status: Status::Ready,
            selected: 0,
            exit_armed: false,
            should_quit: false,
            result: None,
            popup: None,
            prompt: None,
        }
    }

    pub fn run(&mut self) -> Result<Value> {
        let mut terminal = TerminalSession::enter()?;
        terminal.draw(|frame| self.draw(frame))?;
        // Mount emissions of the initial tree are not user edits.
        self.settle();
        self.editor.mark_clean();
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.settle();
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key)?,
                Event::Resize(_, _) => {}
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }

        if let Some(value) = self.result.take() {
            Ok(value)
        } else {
            Err(anyhow!("user exited without saving"))
        }
    }

    #[cfg(test)]
    pub(crate) fn editor(&self) -> &SchemaEditor {
        &self.editor
    }

    pub(crate) fn selected_line(&self) -> Option<OutlineLine> {
        self.editor.outline().into_iter().nth(self.selected)
    }

    #[cfg(test)]
    pub(crate) fn status_message(&self) -> String {
        self.status.to_string()
    }

    #[cfg(test)]
    pub(crate) fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Settle point: flush mount emissions of editors rendered this pass.
    pub(crate) fn settle(&mut self) {
        if let Some(schema) = self.editor.settle() {
            debug!(%schema, "settled");
        }
    }

    fn context(&self) -> KeymapContext {
        if self.prompt.is_some() {
            KeymapContext::Text
        } else if self.popup.is_some() {
            KeymapContext::Picker
        } else {
            KeymapContext::Default
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let lines = self.editor.outline();
        let help = if self.options.show_help {
            keymap::help_text(self.context())
        } else {
            None
        };
        let preview = self
            .editor
            .schema()
            .and_then(|schema| serde_json::to_string_pretty(&schema.to_value()).ok());
        let status = self.status.to_string();

        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                lines: &lines,
                selected: self.selected,
                preview: preview.as_deref(),
                status_message: &status,
                dirty: self.editor.is_dirty(),
                error_count: self.editor.errors().len(),
                help: help.as_deref(),
                popup: self.popup.as_ref().map(PopupState::as_render),
                prompt: self.prompt.as_ref().map(|prompt| PromptRender {
                    title: prompt.title(),
                    buffer: prompt.buffer(),
                }),
            },
        );
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if self.prompt.is_some() {
            self.handle_prompt_key(&key);
            return Ok(());
        }
        if self.popup.is_some() {
            self.handle_popup_key(&key);
            return Ok(());
        }

        let Some(action) = keymap::classify_key(&key, KeymapContext::Default) else {
            return Ok(());
        };
        if action != KeyAction::Quit {
            self.exit_armed = false;
        }
        match action {
            KeyAction::Save => self.on_save(),
            KeyAction::Quit => self.on_exit(),
            KeyAction::ResetStatus => self.status = Status::Ready,
            KeyAction::MoveSelection(delta) => self.move_selection(delta),
            KeyAction::PickType => self.open_picker(),
            KeyAction::ToggleNullable => self.toggle_nullable(),
            KeyAction::EditName => self.open_prompt(),
            KeyAction::AddEntry => self.add_entry(),
            KeyAction::RemoveEntry => self.remove_entry(),
            KeyAction::ToggleHelp => self.options.show_help = !self.options.show_help,
            KeyAction::Confirm | KeyAction::Cancel => {}
        }
        Ok(())
    }

    fn handle_popup_key(&mut self, key: &KeyEvent) {
        let Some(popup) = self.popup.as_mut() else {
            return;
        };
        match keymap::classify_key(key, KeymapContext::Picker) {
            Some(KeyAction::MoveSelection(delta)) => popup.step(delta),
            Some(KeyAction::Confirm) => {
                if let Some(popup) = self.popup.take() {
                    let event = RowEvent::SetType {
                        slot: popup.target().index(),
                        type_name: popup.selection().to_string(),
                    };
                    self.apply(popup.path(), event);
                }
            }
            Some(KeyAction::Cancel) => {
                self.popup = None;
                self.status = Status::Ready;
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: &KeyEvent) {
        match keymap::classify_key(key, KeymapContext::Text) {
            Some(KeyAction::Confirm) => {
                if let Some(prompt) = self.prompt.take() {
                    let value = prompt.buffer().to_string();
                    let event = match prompt.target() {
                        LineTarget::Symbol(index) => RowEvent::SetSymbol { index, value },
                        target => RowEvent::SetName {
                            slot: target.index(),
                            name: value,
                        },
                    };
                    self.apply(prompt.path(), event);
                }
            }
            Some(KeyAction::Cancel) => {
                self.prompt = None;
                self.status = Status::Ready;
            }
            _ => match (self.prompt.as_mut(), text_edit(key)) {
                (Some(prompt), Some(TextEdit::Insert(ch))) => prompt.push(ch),
                (Some(prompt), Some(TextEdit::Backspace)) => prompt.pop(),
                _ => {}
            },
        }
    }

    fn move_selection(&mut self, delta: i32) {
        let len = self.editor.outline().len();
        if len == 0 {
            return;
        }
        let current = self.selected.min(len - 1) as i64;
        self.selected = (current + delta as i64).rem_euclid(len as i64) as usize;
    }

    fn open_picker(&mut self) {
        let Some(line) = self.selected_line() else {
            return;
        };
        if !line.target.has_type() {
            self.open_prompt();
            return;
        }
        if let Some(popup) = PopupState::for_line(&line) {
            self.popup = Some(popup);
            self.status = Status::Picking;
        }
    }

    fn open_prompt(&mut self) {
        let Some(line) = self.selected_line() else {
            return;
        };
        let current = current_name(&self.editor, &line);
        if let Some(prompt) = TextPrompt::for_line(&line, &current) {
            self.status = Status::Editing(line.label.clone());
            self.prompt = Some(prompt);
        }
    }

    fn toggle_nullable(&mut self) {
        let Some(line) = self.selected_line() else {
            return;
        };
        if !line.target.has_type() {
            return;
        }
        let event = RowEvent::SetNullable {
            slot: line.target.index(),
            nullable: !line.nullable,
        };
        self.apply(&line.path, event);
    }

    fn add_entry(&mut self) {
        let Some(line) = self.selected_line() else {
            return;
        };
        let (event, inserted) = match line.target {
            LineTarget::Field(index) => (
                RowEvent::AddEntry { after: index },
                LineTarget::Field(index + 1),
            ),
            LineTarget::Variant(index) => (
                RowEvent::AddEntry { after: index },
                LineTarget::Variant(index + 1),
            ),
            LineTarget::Symbol(index) => (
                RowEvent::InsertSymbol {
                    index,
                    value: String::new(),
                },
                LineTarget::Symbol(index + 1),
            ),
            _ => return,
        };
        self.apply(&line.path, event);
        self.select_target(&line.path, inserted);
    }

    fn remove_entry(&mut self) {
        let Some(line) = self.selected_line() else {
            return;
        };
        let event = match line.target {
            LineTarget::Field(index) | LineTarget::Variant(index) => {
                RowEvent::RemoveEntry { index }
            }
            LineTarget::Symbol(index) => RowEvent::RemoveSymbol { index },
            _ => return,
        };
        self.apply(&line.path, event);
    }

    fn select_target(&mut self, path: &RowPath, target: LineTarget) {
        if let Some(position) = self
            .editor
            .outline()
            .iter()
            .position(|line| &line.path == path && line.target == target)
        {
            self.selected = position;
        }
    }

    fn apply(&mut self, path: &RowPath, event: RowEvent) {
        match self.editor.dispatch(path, event) {
            Ok(Some(_)) => self.status = Status::Updated,
            Ok(None) => match self.editor.row_at(path).and_then(SchemaRow::error) {
                Some(reason) => self.status = Status::Rejected(reason.to_string()),
                None => self.status = Status::Ready,
            },
            Err(err) => {
                warn!(%err, %path, "edit refused");
                self.status = Status::Notice(err.to_string());
            }
        }
        let len = self.editor.outline().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn on_save(&mut self) {
        match self.editor.current() {
            Some(schema) => {
                self.status = Status::Saved;
                self.result = Some(schema.to_value());
                self.editor.mark_clean();
                self.should_quit = true;
            }
            None => {
                let issues = self.editor.errors().len();
                if issues > 0 {
                    self.status = Status::Issues(issues);
                } else {
                    self.status = Status::Incomplete;
                }
            }
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.editor.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status = Status::ConfirmExit;
            return;
        }
        self.should_quit = true;
        self.result = None;
    }
}

/// Raw name behind a named line; outline labels substitute placeholders.
fn current_name(editor: &SchemaEditor, line: &OutlineLine) -> String {
    match (editor.row_at(&line.path), line.target) {
        (Some(SchemaRow::Record(record)), LineTarget::Field(index)) => record
            .fields()
            .get(index)
            .map(|field| field.name().to_string())
            .unwrap_or_default(),
        (Some(SchemaRow::Enum(enumeration)), LineTarget::Symbol(index)) => enumeration
            .symbols()
            .get(index)
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    }
}
