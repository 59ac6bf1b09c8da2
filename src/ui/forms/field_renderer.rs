//! Field rendering utilities for forms

use crate::state::FieldKind;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field box needs, borders included
pub fn field_height(kind: Option<FieldKind>, has_error: bool) -> u16 {
    let content = match kind {
        Some(FieldKind::FreeText) => 3,
        _ => 1,
    };
    content + 2 + u16::from(has_error)
}

/// Value lines for a text-like field, with a cursor when active
pub fn text_lines(value: &str, is_active: bool, is_multiline: bool) -> Vec<Line<'static>> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    if is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        lines
    } else {
        vec![Line::from(vec![
            Span::styled(display_value.to_string(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])]
    }
}

/// One line listing select options, marking chosen ones and the highlighted one
pub fn option_line(
    options: &[&str],
    is_chosen: impl Fn(&str) -> bool,
    highlighted: Option<usize>,
    multi: bool,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (idx, option) in options.iter().enumerate() {
        let chosen = is_chosen(option);
        let marker = match (multi, chosen) {
            (true, true) => "[x]",
            (true, false) => "[ ]",
            (false, true) => "(•)",
            (false, false) => "( )",
        };
        let mut style = if chosen {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        if highlighted == Some(idx) {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{marker} {option}"), style));
    }
    Line::from(spans)
}

/// Draw a boxed field with its content lines and optional error text
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    mut lines: Vec<Line<'static>>,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = match (is_active, error.is_some()) {
        (true, _) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default().fg(Color::Red),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
