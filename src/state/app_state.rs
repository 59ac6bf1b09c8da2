//! Application state definitions

use super::forms::RegistrationForm;
use super::registry::{active_fields, always_required_fields, spec_for, FieldKey, FieldKind};

/// A focusable row of the registration screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ProjectType,
    Field(FieldKey),
    Submit,
}

impl Focus {
    /// Field kind behind this row, if it edits a value
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Focus::Field(key) => spec_for(*key).map(|spec| spec.kind),
            Focus::ProjectType | Focus::Submit => None,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    /// Index into `focus_targets()`
    pub focus_index: usize,
    /// Highlighted option inside a select field
    pub option_cursor: usize,
    /// Transient notice for the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(form: RegistrationForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Rows shown for the current category, top to bottom
    pub fn focus_targets(&self) -> Vec<Focus> {
        let category = self.form.category();
        std::iter::once(Focus::ProjectType)
            .chain(
                active_fields(category)
                    .iter()
                    .chain(always_required_fields())
                    .map(|spec| Focus::Field(spec.key)),
            )
            .chain(std::iter::once(Focus::Submit))
            .collect()
    }

    pub fn focused(&self) -> Focus {
        let targets = self.focus_targets();
        targets
            .get(self.focus_index.min(targets.len() - 1))
            .copied()
            .unwrap_or(Focus::ProjectType)
    }

    pub fn next_focus(&mut self) {
        let count = self.focus_targets().len();
        self.focus_index = (self.focus_index + 1) % count;
        self.option_cursor = 0;
    }

    pub fn prev_focus(&mut self) {
        let count = self.focus_targets().len();
        self.focus_index = if self.focus_index == 0 {
            count - 1
        } else {
            self.focus_index - 1
        };
        self.option_cursor = 0;
    }

    /// Keep the focus on the category selector after the field set changed
    pub fn focus_project_type(&mut self) {
        self.focus_index = 0;
        self.option_cursor = 0;
    }

    /// Options of the focused select field
    pub fn focused_options(&self) -> &'static [&'static str] {
        match self.focused() {
            Focus::Field(key) => spec_for(key).map(|spec| spec.options).unwrap_or_default(),
            Focus::ProjectType | Focus::Submit => &[],
        }
    }

    pub fn move_option_cursor(&mut self, forward: bool) {
        let count = self.focused_options().len();
        if count == 0 {
            return;
        }
        self.option_cursor = if forward {
            (self.option_cursor + 1) % count
        } else if self.option_cursor == 0 {
            count - 1
        } else {
            self.option_cursor - 1
        };
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
