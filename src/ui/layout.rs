//! Layout components (main area, status bar)

use crate::app::App;
use crate::state::{FieldKind, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    let hints = get_focus_hints(app.state.focused());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused row
fn get_focus_hints(focus: Focus) -> &'static str {
    match (focus, focus.kind()) {
        (Focus::ProjectType, _) => "←/→:project type  Tab:next  ^S:register",
        (Focus::Submit, _) => "Enter:register  Tab:next",
        (_, Some(FieldKind::SingleSelect)) => "←/→:choose  Tab:next  ^S:register",
        (_, Some(FieldKind::MultiSelect)) => "←/→:move  Space:toggle  Tab:next  ^S:register",
        (_, Some(FieldKind::FreeText)) => "type to edit  Enter:newline  Tab:next  ^S:register",
        _ => "type to edit  Tab:next  ^S:register",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKey;

    #[test]
    fn test_hints_follow_field_kind() {
        assert!(get_focus_hints(Focus::Field(FieldKey::Frameworks)).contains("Space:toggle"));
        assert!(get_focus_hints(Focus::Field(FieldKey::PreviousExperience)).contains("newline"));
        assert!(get_focus_hints(Focus::Submit).starts_with("Enter"));
    }

    #[test]
    fn test_create_layout_reserves_status_line() {
        let main = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(main.height, 23);
    }
}
