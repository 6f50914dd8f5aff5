use serde::Deserialize;

/// What a key press asks the editor to do. Keymap files name these in
/// camelCase; `moveSelection` carries its step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum KeyAction {
    Save,
    Quit,
    ResetStatus,
    MoveSelection(i32),
    PickType,
    ToggleNullable,
    EditName,
    AddEntry,
    RemoveEntry,
    ToggleHelp,
    Confirm,
    Cancel,
}

/// Plain text typed while a name prompt is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextEdit {
    Insert(char),
    Backspace,
}

pub(crate) fn text_edit(key: &crossterm::event::KeyEvent) -> Option<TextEdit> {
    use crossterm::event::{KeyCode, KeyModifiers};

    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => Some(TextEdit::Insert(ch)),
        KeyCode::Backspace => Some(TextEdit::Backspace),
        _ => None,
    }
}
