use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::form::OutlineLine;

use super::components::{render_body, render_footer, render_popup, render_prompt};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub lines: &'a [OutlineLine],
    pub selected: usize,
    /// Last emitted schema, pretty printed.
    pub preview: Option<&'a str>,
    pub status_message: &'a str,
    pub dirty: bool,
    pub error_count: usize,
    pub help: Option<&'a str>,
    pub popup: Option<PopupRender<'a>>,
    pub prompt: Option<PromptRender<'a>>,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [&'a str],
    pub selected: usize,
}

pub struct PromptRender<'a> {
    pub title: &'a str,
    pub buffer: &'a str,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let [body, footer] = Layout::vertical([Constraint::Min(7), Constraint::Length(4)])
        .areas(frame.area());
    render_body(frame, body, &ctx);
    render_footer(frame, footer, &ctx);

    // The prompt and the picker are never open together.
    match (ctx.popup, ctx.prompt) {
        (_, Some(prompt)) => render_prompt(frame, prompt),
        (Some(popup), None) => render_popup(frame, popup),
        (None, None) => {}
    }
}
