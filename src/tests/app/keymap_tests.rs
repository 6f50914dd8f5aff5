use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{KeyAction, KeymapContext, classify_key, help_text};

use super::{ctrl, key};

#[test]
fn default_context_bindings() {
    let ctx = KeymapContext::Default;
    assert_eq!(classify_key(&ctrl('s'), ctx), Some(KeyAction::Save));
    assert_eq!(classify_key(&ctrl('q'), ctx), Some(KeyAction::Quit));
    assert_eq!(classify_key(&ctrl('c'), ctx), Some(KeyAction::Quit));
    assert_eq!(
        classify_key(&key(KeyCode::Down), ctx),
        Some(KeyAction::MoveSelection(1))
    );
    assert_eq!(
        classify_key(&key(KeyCode::BackTab), ctx),
        Some(KeyAction::MoveSelection(-1))
    );
    assert_eq!(classify_key(&key(KeyCode::Enter), ctx), Some(KeyAction::PickType));
    assert_eq!(
        classify_key(&key(KeyCode::Char(' ')), ctx),
        Some(KeyAction::ToggleNullable)
    );
    assert_eq!(classify_key(&key(KeyCode::F(2)), ctx), Some(KeyAction::EditName));
    assert_eq!(classify_key(&key(KeyCode::Insert), ctx), Some(KeyAction::AddEntry));
    assert_eq!(classify_key(&key(KeyCode::Char('d')), ctx), Some(KeyAction::RemoveEntry));
    assert_eq!(classify_key(&key(KeyCode::Esc), ctx), Some(KeyAction::ResetStatus));
}

#[test]
fn letters_accept_shift_but_not_control() {
    let ctx = KeymapContext::Default;
    let shifted = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
    assert_eq!(classify_key(&shifted, ctx), Some(KeyAction::EditName));
    assert_eq!(classify_key(&ctrl('r'), ctx), None);
    assert_eq!(classify_key(&ctrl('x'), ctx), None);
}

#[test]
fn picker_and_prompt_share_confirm_and_cancel() {
    for ctx in [KeymapContext::Picker, KeymapContext::Text] {
        assert_eq!(classify_key(&key(KeyCode::Enter), ctx), Some(KeyAction::Confirm));
        assert_eq!(classify_key(&key(KeyCode::Esc), ctx), Some(KeyAction::Cancel));
    }
    assert_eq!(
        classify_key(&key(KeyCode::Up), KeymapContext::Picker),
        Some(KeyAction::MoveSelection(-1))
    );
}

#[test]
fn prompt_leaves_letters_to_the_text_buffer() {
    let ctx = KeymapContext::Text;
    assert_eq!(classify_key(&key(KeyCode::Char('r')), ctx), None);
    assert_eq!(classify_key(&key(KeyCode::Char('a')), ctx), None);
    assert_eq!(classify_key(&key(KeyCode::Down), ctx), None);
}

#[test]
fn help_lists_bindings_per_context() {
    let default = help_text(KeymapContext::Default).unwrap();
    assert!(default.starts_with("Ctrl+S save schema"));
    assert!(default.contains("Ctrl+Q/Ctrl+C quit"));
    assert!(!default.contains("apply"));

    let picker = help_text(KeymapContext::Picker).unwrap();
    assert!(picker.contains("Enter apply"));
    assert!(picker.contains(" • "));
    assert!(!picker.contains("save schema"));
}
