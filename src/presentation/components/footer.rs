use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::super::view::UiContext;

/// Key hints on the first row, status and schema health on the second.
pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let [keys_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .areas(area);

    if let Some(help) = ctx.help {
        let keys = Paragraph::new(help)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(keys, keys_area);
    }

    let health = match (ctx.error_count, ctx.preview.is_some()) {
        (0, true) => Span::styled("valid", Style::default().fg(Color::Green)),
        (0, false) => Span::styled("incomplete", Style::default().fg(Color::Yellow)),
        (count, _) => Span::styled(
            format!("{count} rejected"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let mut spans = vec![health, Span::raw(" │ ")];
    if ctx.dirty {
        spans.push(Span::styled("modified ", Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::raw(ctx.status_message));

    let status = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    frame.render_widget(status, status_area);
}
