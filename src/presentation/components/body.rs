use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::form::{LineTarget, OutlineLine};

use super::super::view::UiContext;

const INDENT: &str = "  ";

pub fn render_body(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    render_outline(frame, chunks[0], ctx);
    render_preview(frame, chunks[1], ctx.preview);
}

fn render_outline(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let block = Block::default()
        .title(ctx.title.to_string())
        .borders(Borders::ALL);
    if ctx.lines.is_empty() {
        frame.render_widget(Paragraph::new("Nothing to edit").block(block), area);
        return;
    }

    let content_width = area.width.saturating_sub(4).max(8) as usize;
    let label_column = ctx
        .lines
        .iter()
        .map(|line| INDENT.len() * line.depth + UnicodeWidthStr::width(line.label.as_str()))
        .max()
        .unwrap_or(0)
        .min(content_width / 2);

    let items: Vec<ListItem<'static>> = ctx
        .lines
        .iter()
        .map(|line| ListItem::new(line_render(line, label_column, content_width)))
        .collect();

    let mut state = ListState::default();
    state.select(Some(ctx.selected.min(ctx.lines.len() - 1)));
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn line_render(line: &OutlineLine, label_column: usize, max_width: usize) -> Vec<Line<'static>> {
    let indent = INDENT.repeat(line.depth);
    let label_style = match line.target {
        LineTarget::Symbol(_) => Style::default().fg(Color::Magenta),
        LineTarget::Field(_) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::Cyan),
    };
    let label = if line.label.is_empty() {
        "<empty>".to_string()
    } else {
        line.label.clone()
    };
    let used = indent.len() + UnicodeWidthStr::width(label.as_str());
    let padding = " ".repeat(label_column.saturating_sub(used) + 1);

    let mut spans = vec![
        Span::raw(indent.clone()),
        Span::styled(label, label_style),
        Span::raw(padding),
    ];
    if let Some(type_name) = &line.type_name {
        spans.push(Span::styled(
            type_name.clone(),
            Style::default().fg(Color::Yellow),
        ));
        if line.nullable {
            spans.push(Span::styled(" | null", Style::default().fg(Color::Gray)));
        }
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(error) = &line.error {
        let width = max_width.saturating_sub(indent.len() + 2).max(8);
        for segment in wrap(error, width) {
            lines.push(Line::from(Span::styled(
                format!("{indent}! {segment}"),
                Style::default().fg(Color::Red),
            )));
        }
    }
    lines
}

fn render_preview(frame: &mut Frame<'_>, area: Rect, preview: Option<&str>) {
    let body = preview.unwrap_or("(no valid schema yet)");
    let widget = Paragraph::new(body.to_string())
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Schema").borders(Borders::ALL));
    frame.render_widget(widget, area);
}
