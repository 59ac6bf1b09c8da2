//! Form field value objects

use crate::state::registry::{FieldKey, FieldKind};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Multi-select members in the order they were picked
    Choices(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Empty value of the right shape for `kind`
    pub fn empty_for(kind: FieldKind) -> Self {
        if kind.is_multi_valued() {
            FieldValue::Choices(Vec::new())
        } else {
            FieldValue::Text(String::new())
        }
    }
}

/// A single form field: its key and current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: FieldKey,
    pub value: FieldValue,
}

impl FormField {
    /// Create an empty field of the given kind
    pub fn new(key: FieldKey, kind: FieldKind) -> Self {
        Self {
            key,
            value: FieldValue::empty_for(kind),
        }
    }

    /// Get the text value (returns empty string for multi-select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choices(_) => "",
        }
    }

    /// Get the selected choices (returns an empty slice for text fields)
    pub fn as_choices(&self) -> &[String] {
        match &self.value {
            FieldValue::Choices(c) => c,
            FieldValue::Text(_) => &[],
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Add `choice` if absent, remove it if present
    pub fn toggle_choice(&mut self, choice: &str) {
        if let FieldValue::Choices(choices) = &mut self.value {
            if let Some(pos) = choices.iter().position(|c| c == choice) {
                choices.remove(pos);
            } else {
                choices.push(choice.to_string());
            }
        }
    }

    /// Whether `choice` is currently selected
    pub fn has_choice(&self, choice: &str) -> bool {
        self.as_choices().iter().any(|c| c == choice)
    }

    /// Clear the field value, keeping its shape
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choices(c) => c.clear(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Choices(c) => c.is_empty(),
        }
    }
}
