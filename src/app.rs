//! Application state and core logic

use crate::config::TuiConfig;
use crate::sink::SubmissionSink;
use crate::state::{AppState, FieldKey, FieldKind, Focus, RegistrationForm, SubmitOutcome};
use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receiver of accepted registrations
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, sink: Box<dyn SubmissionSink>) -> Self {
        let form = match &config.confirmation_message {
            Some(message) => RegistrationForm::with_confirmation(message.clone()),
            None => RegistrationForm::new(),
        };
        Self {
            state: AppState::new(form),
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => return self.submit().await,
            KeyCode::Esc => {
                if self.state.form.success_message().is_some() {
                    self.state.form.acknowledge_success();
                } else {
                    self.quit = true;
                }
                return Ok(());
            }
            _ => {}
        }

        // The confirmation has been seen once the user keeps working
        self.state.form.acknowledge_success();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            _ => match self.state.focused() {
                Focus::ProjectType => self.handle_project_type_key(key.code),
                Focus::Field(field) => self.handle_field_key(field, key.code)?,
                Focus::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit().await?;
                    }
                }
            },
        }
        Ok(())
    }

    fn handle_project_type_key(&mut self, code: KeyCode) {
        let current = self.state.form.category();
        let next = match code {
            KeyCode::Left => current.prev(),
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => current.next(),
            _ => return,
        };
        self.state.form.select_category(next);
        self.state.focus_project_type();
        self.state.status_message = None;
    }

    fn handle_field_key(&mut self, field: FieldKey, code: KeyCode) -> Result<()> {
        let Some(kind) = Focus::Field(field).kind() else {
            return Ok(());
        };
        let options = self.state.focused_options();
        let state = &mut self.state;

        match (kind, code) {
            (FieldKind::SingleSelect, KeyCode::Left | KeyCode::Right) if !options.is_empty() => {
                let current = options.iter().position(|o| *o == state.form.text(field));
                let index = match (current, code) {
                    (None, KeyCode::Left) => options.len() - 1,
                    (None, _) => 0,
                    (Some(i), KeyCode::Left) => (i + options.len() - 1) % options.len(),
                    (Some(i), _) => (i + 1) % options.len(),
                };
                state.form.set_single_value(field, options[index])?;
                state.option_cursor = index;
            }
            (FieldKind::MultiSelect, KeyCode::Left) => state.move_option_cursor(false),
            (FieldKind::MultiSelect, KeyCode::Right) => state.move_option_cursor(true),
            (FieldKind::MultiSelect, KeyCode::Char(' ') | KeyCode::Enter) => {
                if let Some(choice) = options.get(state.option_cursor) {
                    state.form.toggle_multi_value(field, choice)?;
                }
            }
            (FieldKind::FreeText, KeyCode::Enter) => state.form.push_char(field, '\n')?,
            (FieldKind::SingleSelect | FieldKind::MultiSelect, _) => {}
            (_, KeyCode::Char(c)) => state.form.push_char(field, c)?,
            (_, KeyCode::Backspace) => state.form.pop_char(field)?,
            (_, KeyCode::Enter) => state.next_focus(),
            _ => {}
        }
        Ok(())
    }

    /// Validate now and deliver the registration if it passes
    pub async fn submit(&mut self) -> Result<()> {
        self.submit_at(Utc::now()).await
    }

    async fn submit_at(&mut self, now: DateTime<Utc>) -> Result<()> {
        match self.state.form.submit(now) {
            SubmitOutcome::Accepted(payload) => {
                self.state.focus_project_type();
                self.state.status_message = None;
                if let Err(err) = self.sink.deliver(&payload).await {
                    tracing::warn!("Failed to deliver registration: {err:#}");
                    self.state.set_status(format!("Delivery failed: {err}"));
                }
            }
            SubmitOutcome::Rejected(errors) => {
                let targets = self.state.focus_targets();
                let first_error = targets.iter().position(|focus| match focus {
                    Focus::ProjectType => errors.contains_key(&FieldKey::ProjectType),
                    Focus::Field(key) => errors.contains_key(key),
                    Focus::Submit => false,
                });
                if let Some(index) = first_error {
                    self.state.focus_index = index;
                    self.state.option_cursor = 0;
                }
                self.state
                    .set_status(format!("{} field(s) need attention", errors.len()));
            }
        }
        Ok(())
    }
}
