mod input;
mod keymap;
mod options;
mod popup;
mod runtime;
mod schema_ui;
mod status;
mod terminal;

pub use options::UiOptions;
pub use schema_ui::AvroForm;

#[cfg(test)]
pub(crate) use {
    input::KeyAction,
    keymap::{KeymapContext, classify_key, help_text},
    runtime::App,
};
