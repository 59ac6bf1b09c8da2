//! Project registration form rendering

use super::field_renderer::{draw_field, field_height, option_line, text_lines};
use crate::app::App;
use crate::state::{spec_for, AppState, Category, FieldKey, FieldKind, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let targets = state.focus_targets();
    let focused = state.focused();

    let block = Block::default()
        .title(" Project Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = targets
        .iter()
        .map(|target| match target {
            Focus::ProjectType => Constraint::Length(field_height(
                None,
                state.form.error(FieldKey::ProjectType).is_some(),
            )),
            Focus::Field(key) => {
                Constraint::Length(field_height(target.kind(), state.form.error(*key).is_some()))
            }
            Focus::Submit => Constraint::Length(BUTTON_HEIGHT),
        })
        .collect();
    constraints.push(Constraint::Length(1)); // Success message
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (idx, target) in targets.iter().enumerate() {
        let is_active = *target == focused;
        match target {
            Focus::ProjectType => draw_project_type(frame, chunks[idx], state, is_active),
            Focus::Field(key) => draw_value_field(frame, chunks[idx], state, *key, is_active),
            Focus::Submit => {
                render_button(frame, chunks[idx], "Register Project", is_active, Color::Green)
            }
        }
    }

    if let Some(message) = state.form.success_message() {
        let success = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(success, chunks[targets.len()]);
    }
}

fn draw_project_type(frame: &mut Frame, area: Rect, state: &AppState, is_active: bool) {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let selected = state.form.category();
    let line = option_line(&labels, |label| label == selected.label(), None, false);
    draw_field(
        frame,
        area,
        FieldKey::ProjectType.label(),
        vec![line],
        is_active,
        state.form.error(FieldKey::ProjectType),
    );
}

fn draw_value_field(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    key: FieldKey,
    is_active: bool,
) {
    let Some(spec) = spec_for(key) else {
        return;
    };
    let highlighted = is_active.then_some(state.option_cursor);

    let lines = match spec.kind {
        FieldKind::SingleSelect => {
            let value = state.form.text(key);
            vec![option_line(spec.options, |o| o == value, None, false)]
        }
        FieldKind::MultiSelect => {
            let field = state.form.values().get(key);
            vec![option_line(
                spec.options,
                |o| field.is_some_and(|f| f.has_choice(o)),
                highlighted,
                true,
            )]
        }
        kind => text_lines(state.form.text(key), is_active, kind.is_multiline()),
    };

    draw_field(frame, area, spec.label(), lines, is_active, state.form.error(key));
}
