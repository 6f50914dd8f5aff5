mod components;
mod view;

pub use view::{PopupRender, PromptRender, UiContext, draw};
