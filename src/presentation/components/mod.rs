mod body;
mod footer;
mod layout;
mod popup;

pub use body::render_body;
pub use footer::render_footer;
pub use popup::{render_popup, render_prompt};
