use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::super::view::{PopupRender, PromptRender};
use super::layout::popup_rect;

pub fn render_popup(frame: &mut Frame<'_>, popup: PopupRender<'_>) {
    if popup.options.is_empty() {
        return;
    }
    let widest = popup
        .options
        .iter()
        .map(|option| UnicodeWidthStr::width(*option))
        .chain(std::iter::once(UnicodeWidthStr::width(popup.title)))
        .max()
        .unwrap_or(10) as u16;
    let width = widest.saturating_add(6);
    let height = (popup.options.len() as u16).saturating_add(2);
    let area = popup_rect(frame.area(), width, height.max(3));
    frame.render_widget(Clear, area);

    let items: Vec<ListItem<'static>> = popup
        .options
        .iter()
        .map(|option| ListItem::new(option.to_string()))
        .collect();
    let mut state = ListState::default();
    state.select(Some(popup.selected.min(popup.options.len() - 1)));

    let list = List::new(items)
        .block(
            Block::default()
                .title(popup.title.to_string())
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut state);
}

pub fn render_prompt(frame: &mut Frame<'_>, prompt: PromptRender<'_>) {
    let typed = UnicodeWidthStr::width(prompt.buffer) as u16;
    let width = typed.max(24).saturating_add(4);
    let area = popup_rect(frame.area(), width, 3);
    frame.render_widget(Clear, area);

    let widget = Paragraph::new(prompt.buffer.to_string()).block(
        Block::default()
            .title(format!("{} (Enter to apply, Esc to cancel)", prompt.title))
            .borders(Borders::ALL),
    );
    frame.render_widget(widget, area);

    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2));
    frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
}
