use std::str::FromStr;
use std::sync::LazyLock;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;
use thiserror::Error;

use super::input::KeyAction;

static DEFAULT_KEYMAP: LazyLock<Keymap> = LazyLock::new(|| {
    Keymap::from_json(include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/keymap/default.keymap.json"
    )))
    .expect("invalid keymap/default.keymap.json")
});

/// Which part of the editor has focus; bindings are scoped to one or more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum KeymapContext {
    /// Moving around the outline.
    Default,
    /// Type picker popup.
    Picker,
    /// Name prompt.
    Text,
}

#[derive(Debug, Error)]
pub(crate) enum KeymapError {
    #[error("keymap is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binding '{binding}' has no {missing}")]
    Empty {
        binding: String,
        missing: &'static str,
    },
    #[error("binding '{binding}': {reason}")]
    Chord { binding: String, reason: String },
}

#[derive(Deserialize)]
struct BindingSpec {
    description: String,
    when: Vec<KeymapContext>,
    action: KeyAction,
    keys: Vec<String>,
}

struct Binding {
    action: KeyAction,
    when: Vec<KeymapContext>,
    chords: Vec<Chord>,
    hint: String,
}

pub(crate) struct Keymap {
    bindings: Vec<Binding>,
}

impl Keymap {
    pub(crate) fn from_json(source: &str) -> Result<Self, KeymapError> {
        let specs: Vec<BindingSpec> = serde_json::from_str(source)?;
        let bindings = specs
            .into_iter()
            .map(Binding::try_from)
            .collect::<Result<_, _>>()?;
        Ok(Self { bindings })
    }

    /// First binding active in `context` that accepts `key`.
    pub(crate) fn action_for(&self, key: &KeyEvent, context: KeymapContext) -> Option<KeyAction> {
        self.active(context)
            .find(|binding| binding.chords.iter().any(|chord| chord.accepts(key)))
            .map(|binding| binding.action)
    }

    /// `"Ctrl+S save schema • ..."` for every binding active in `context`.
    pub(crate) fn hints(&self, context: KeymapContext) -> Option<String> {
        let hints: Vec<&str> = self
            .active(context)
            .map(|binding| binding.hint.as_str())
            .collect();
        (!hints.is_empty()).then(|| hints.join(" • "))
    }

    fn active(&self, context: KeymapContext) -> impl Iterator<Item = &Binding> {
        self.bindings
            .iter()
            .filter(move |binding| binding.when.contains(&context))
    }
}

impl TryFrom<BindingSpec> for Binding {
    type Error = KeymapError;

    fn try_from(spec: BindingSpec) -> Result<Self, Self::Error> {
        let empty = |missing| KeymapError::Empty {
            binding: spec.description.clone(),
            missing,
        };
        if spec.when.is_empty() {
            return Err(empty("context"));
        }
        if spec.keys.is_empty() {
            return Err(empty("keys"));
        }
        let chords = spec
            .keys
            .iter()
            .map(|raw| {
                raw.parse::<Chord>().map_err(|reason| KeymapError::Chord {
                    binding: spec.description.clone(),
                    reason,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            action: spec.action,
            when: spec.when,
            hint: format!("{} {}", spec.keys.join("/"), spec.description),
            chords,
        })
    }
}

/// A key plus the modifiers that must be held, e.g. `Ctrl+S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Chord {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl Chord {
    /// Letters and symbols match either case; Shift is only significant when
    /// the chord names it.
    fn accepts(&self, key: &KeyEvent) -> bool {
        let shift_free = matches!(self.code, KeyCode::Char(_) | KeyCode::BackTab)
            && !self.modifiers.contains(KeyModifiers::SHIFT);
        let held = if shift_free {
            key.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            key.modifiers
        };
        let code = match key.code {
            KeyCode::Char(ch) => KeyCode::Char(ch.to_ascii_lowercase()),
            other => other,
        };
        code == self.code && held == self.modifiers
    }
}

impl FromStr for Chord {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = raw.split('+').map(str::trim).collect();
        let key = parts.pop().filter(|key| !key.is_empty()).ok_or("missing key")?;
        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            modifiers |= match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                other => return Err(format!("unknown modifier '{other}'")),
            };
        }
        Ok(Self {
            code: key_code(key)?,
            modifiers,
        })
    }
}

fn key_code(name: &str) -> Result<KeyCode, String> {
    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "insert" => KeyCode::Insert,
        "delete" | "del" => KeyCode::Delete,
        "backspace" => KeyCode::Backspace,
        _ => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(n)
            } else {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyCode::Char(ch),
                    _ => return Err(format!("unknown key '{name}'")),
                }
            }
        }
    };
    Ok(code)
}

pub(crate) fn classify_key(key: &KeyEvent, context: KeymapContext) -> Option<KeyAction> {
    DEFAULT_KEYMAP.action_for(key, context)
}

pub(crate) fn help_text(context: KeymapContext) -> Option<String> {
    DEFAULT_KEYMAP.hints(context)
}
