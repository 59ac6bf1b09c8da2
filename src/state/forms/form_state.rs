//! Form state management for the registration form

use super::field::FormField;
use crate::state::payload::RegistrationPayload;
use crate::state::registry::{self, Category, FieldKey, FieldKind};
use crate::state::validation::{self, ErrorMap};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

/// Confirmation shown after a successful submit
pub const DEFAULT_CONFIRMATION: &str = "Project registered successfully!";

/// Misuse of the controller API; user input problems go to the error map instead
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("the project type is changed with select_category, not as a field value")]
    CategoryField,
    #[error("{0} is a multi-select field; toggle its choices instead")]
    NotSingleValued(FieldKey),
    #[error("{0} is not a multi-select field")]
    NotMultiValued(FieldKey),
}

/// Current value of every field, keyed by field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    fields: BTreeMap<FieldKey, FormField>,
}

impl Default for FieldValues {
    fn default() -> Self {
        let fields = FieldKey::VALUE_KEYS
            .into_iter()
            .filter_map(registry::spec_for)
            .map(|spec| (spec.key, FormField::new(spec.key, spec.kind)))
            .collect();
        Self { fields }
    }
}

impl FieldValues {
    pub fn get(&self, key: FieldKey) -> Option<&FormField> {
        self.fields.get(&key)
    }

    /// Text of a single-valued field, empty when unset
    pub fn text(&self, key: FieldKey) -> &str {
        self.get(key).map(FormField::as_text).unwrap_or_default()
    }

    /// Members of a multi-select field, empty when unset
    pub fn choices(&self, key: FieldKey) -> &[String] {
        self.get(key).map(FormField::as_choices).unwrap_or_default()
    }

    pub(crate) fn field_mut(&mut self, key: FieldKey) -> &mut FormField {
        self.fields
            .entry(key)
            .or_insert_with(|| FormField::new(key, FieldKind::FreeText))
    }

    pub fn clear_all(&mut self) {
        self.fields.values_mut().for_each(FormField::clear);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.values().all(FormField::is_empty)
    }
}

/// Observable phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Unselected,
    CategorySelected(Category),
    Failed(Category),
    /// Reset after a submit; collapses to `Unselected` once acknowledged
    Succeeded,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted(RegistrationPayload),
    Rejected(ErrorMap),
}

/// The registration form controller: sole owner of the form's mutable state
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    category: Category,
    values: FieldValues,
    errors: ErrorMap,
    success_message: Option<String>,
    confirmation: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::with_confirmation(DEFAULT_CONFIRMATION)
    }

    /// Create a form that reports `confirmation` after a successful submit
    pub fn with_confirmation(confirmation: impl Into<String>) -> Self {
        Self {
            category: Category::Unselected,
            values: FieldValues::default(),
            errors: ErrorMap::new(),
            success_message: None,
            confirmation: confirmation.into(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn text(&self, key: FieldKey) -> &str {
        self.values.text(key)
    }

    pub fn choices(&self, key: FieldKey) -> &[String] {
        self.values.choices(key)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(&key).map(String::as_str)
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Unselected category, all values empty and no errors
    pub fn is_pristine(&self) -> bool {
        !self.category.is_selected() && self.values.is_empty() && self.errors.is_empty()
    }

    pub fn phase(&self) -> FormPhase {
        if self.success_message.is_some() && self.is_pristine() {
            FormPhase::Succeeded
        } else if !self.category.is_selected() {
            FormPhase::Unselected
        } else if self.errors.is_empty() {
            FormPhase::CategorySelected(self.category)
        } else {
            FormPhase::Failed(self.category)
        }
    }

    /// Switch category, clearing every field value, all errors and the success message
    pub fn select_category(&mut self, category: Category) {
        tracing::debug!("Project type changed: {} -> {}", self.category, category);
        self.reset();
        self.category = category;
    }

    /// Store a single-valued field verbatim; validation waits for submit
    pub fn set_single_value(
        &mut self,
        key: FieldKey,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        match key_kind(key)? {
            FieldKind::MultiSelect => Err(FormError::NotSingleValued(key)),
            _ => {
                self.values.field_mut(key).set_text(value.into());
                self.errors.remove(&key);
                tracing::debug!("Field {key} updated");
                Ok(())
            }
        }
    }

    /// Add `choice` to a multi-select field, or remove it if already chosen
    pub fn toggle_multi_value(&mut self, key: FieldKey, choice: &str) -> Result<(), FormError> {
        match key_kind(key)? {
            FieldKind::MultiSelect => {
                self.values.field_mut(key).toggle_choice(choice);
                self.errors.remove(&key);
                tracing::debug!("Field {key} toggled {choice:?}");
                Ok(())
            }
            _ => Err(FormError::NotMultiValued(key)),
        }
    }

    /// Append a typed character to a text-like field
    pub fn push_char(&mut self, key: FieldKey, c: char) -> Result<(), FormError> {
        let mut value = self.text(key).to_string();
        value.push(c);
        self.set_single_value(key, value)
    }

    /// Remove the last character of a text-like field
    pub fn pop_char(&mut self, key: FieldKey) -> Result<(), FormError> {
        let mut value = self.text(key).to_string();
        value.pop();
        self.set_single_value(key, value)
    }

    /// Validate against `now`; on success reset the form and hand back the payload
    pub fn submit(&mut self, now: DateTime<Utc>) -> SubmitOutcome {
        match validation::check(self.category, &self.values, now) {
            Ok(payload) => {
                tracing::info!("Registration accepted for {}", payload.project_type);
                self.reset();
                self.success_message = Some(self.confirmation.clone());
                SubmitOutcome::Accepted(payload)
            }
            Err(errors) => {
                tracing::info!("Registration rejected with {} error(s)", errors.len());
                self.errors = errors.clone();
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Drop the confirmation so the form reads as freshly opened
    pub fn acknowledge_success(&mut self) {
        self.success_message = None;
    }

    fn reset(&mut self) {
        self.category = Category::Unselected;
        self.values.clear_all();
        self.errors.clear();
        self.success_message = None;
    }
}

fn key_kind(key: FieldKey) -> Result<FieldKind, FormError> {
    registry::spec_for(key)
        .map(|spec| spec.kind)
        .ok_or(FormError::CategoryField)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::payload::ProjectDetails;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
    }

    fn future_date() -> String {
        (now() + Duration::days(30)).format("%Y-%m-%d").to_string()
    }

    fn yesterday() -> String {
        (now() - Duration::days(1)).format("%Y-%m-%d").to_string()
    }

    fn fill_common(form: &mut RegistrationForm) {
        form.set_single_value(FieldKey::Deadline, future_date())
            .unwrap();
        form.set_single_value(FieldKey::Budget, "500").unwrap();
        form.set_single_value(FieldKey::ContactInfo, "a@b.com")
            .unwrap();
    }

    fn software_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.select_category(Category::SoftwareDevelopment);
        form.set_single_value(FieldKey::ProgrammingLanguage, "Python")
            .unwrap();
        form.toggle_multi_value(FieldKey::Frameworks, "Django")
            .unwrap();
        fill_common(&mut form);
        form
    }

    mod initial_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_is_pristine() {
            let form = RegistrationForm::new();
            assert!(form.is_pristine());
            assert_eq!(form.category(), Category::Unselected);
            assert_eq!(form.phase(), FormPhase::Unselected);
            assert!(form.success_message().is_none());
        }

        #[test]
        fn test_default_equals_new() {
            assert_eq!(RegistrationForm::default(), RegistrationForm::new());
        }

        #[test]
        fn test_values_have_kind_shapes() {
            let form = RegistrationForm::new();
            assert!(form.choices(FieldKey::DesignTools).is_empty());
            assert_eq!(form.text(FieldKey::Budget), "");
        }
    }

    mod select_category {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_sets_category() {
            let mut form = RegistrationForm::new();
            form.select_category(Category::GraphicDesign);
            assert_eq!(form.category(), Category::GraphicDesign);
            assert_eq!(form.phase(), FormPhase::CategorySelected(Category::GraphicDesign));
        }

        #[test]
        fn test_clears_every_field_including_common_ones() {
            let mut form = software_form();
            form.select_category(Category::Consulting);
            assert!(form.values().is_empty());
            assert!(form.choices(FieldKey::Frameworks).is_empty());
            assert_eq!(form.text(FieldKey::Budget), "");
        }

        #[test]
        fn test_clears_errors_and_success() {
            let mut form = RegistrationForm::new();
            form.submit(now());
            assert!(!form.errors().is_empty());
            form.select_category(Category::Consulting);
            assert!(form.errors().is_empty());

            let mut form = software_form();
            form.submit(now());
            assert!(form.success_message().is_some());
            form.select_category(Category::Consulting);
            assert!(form.success_message().is_none());
        }

        #[test]
        fn test_is_idempotent() {
            let mut once = software_form();
            once.select_category(Category::GraphicDesign);
            let mut twice = software_form();
            twice.select_category(Category::GraphicDesign);
            twice.select_category(Category::GraphicDesign);
            assert_eq!(once, twice);
        }

        #[test]
        fn test_reselecting_same_category_still_resets() {
            let mut form = software_form();
            form.select_category(Category::SoftwareDevelopment);
            assert_eq!(form.text(FieldKey::ProgrammingLanguage), "");
            assert!(form.values().is_empty());
        }
    }

    mod field_edits {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_single_value_is_verbatim() {
            let mut form = RegistrationForm::new();
            form.set_single_value(FieldKey::Budget, "  -3x ").unwrap();
            assert_eq!(form.text(FieldKey::Budget), "  -3x ");
        }

        #[test]
        fn test_set_single_value_rejects_multi_select() {
            let mut form = RegistrationForm::new();
            assert_eq!(
                form.set_single_value(FieldKey::Frameworks, "React"),
                Err(FormError::NotSingleValued(FieldKey::Frameworks))
            );
        }

        #[test]
        fn test_project_type_is_not_a_value() {
            let mut form = RegistrationForm::new();
            assert_eq!(
                form.set_single_value(FieldKey::ProjectType, "Consulting"),
                Err(FormError::CategoryField)
            );
        }

        #[test]
        fn test_edit_clears_only_its_own_error() {
            let mut form = RegistrationForm::new();
            form.select_category(Category::SoftwareDevelopment);
            form.submit(now());
            form.set_single_value(FieldKey::ContactInfo, "me").unwrap();
            assert!(form.error(FieldKey::ContactInfo).is_none());
            assert!(form.error(FieldKey::Budget).is_some());
            assert!(form.error(FieldKey::Frameworks).is_some());
        }

        #[test]
        fn test_toggle_twice_is_noop() {
            let mut form = RegistrationForm::new();
            form.select_category(Category::GraphicDesign);
            form.toggle_multi_value(FieldKey::DesignTools, "Figma")
                .unwrap();
            let before = form.clone();
            form.toggle_multi_value(FieldKey::DesignTools, "Photoshop")
                .unwrap();
            form.toggle_multi_value(FieldKey::DesignTools, "Photoshop")
                .unwrap();
            assert_eq!(form, before);
        }

        #[test]
        fn test_toggle_never_duplicates() {
            let mut form = RegistrationForm::new();
            for _ in 0..5 {
                form.toggle_multi_value(FieldKey::Frameworks, "React")
                    .unwrap();
            }
            assert_eq!(form.choices(FieldKey::Frameworks), ["React"]);
        }

        #[test]
        fn test_toggle_rejects_text_field() {
            let mut form = RegistrationForm::new();
            assert_eq!(
                form.toggle_multi_value(FieldKey::ContactInfo, "x"),
                Err(FormError::NotMultiValued(FieldKey::ContactInfo))
            );
        }

        #[test]
        fn test_push_and_pop_char() {
            let mut form = RegistrationForm::new();
            form.push_char(FieldKey::Budget, '1').unwrap();
            form.push_char(FieldKey::Budget, '0').unwrap();
            form.pop_char(FieldKey::Budget).unwrap();
            assert_eq!(form.text(FieldKey::Budget), "1");
            assert!(form.push_char(FieldKey::Frameworks, 'x').is_err());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_software_development_is_accepted() {
            let mut form = software_form();
            let outcome = form.submit(now());
            let SubmitOutcome::Accepted(payload) = outcome else {
                panic!("expected acceptance");
            };
            assert_eq!(payload.project_type, Category::SoftwareDevelopment);
            assert_eq!(
                payload.details,
                ProjectDetails::SoftwareDevelopment {
                    programming_language: "Python".to_string(),
                    frameworks: vec!["Django".to_string()],
                }
            );
            assert_eq!(payload.deadline, future_date());
            assert_eq!(payload.budget, 500.0);
            assert_eq!(payload.contact_info, "a@b.com");

            let json = serde_json::to_value(&payload).unwrap();
            assert_eq!(json.as_object().map(|m| m.len()), Some(6));

            assert_eq!(form.success_message(), Some(DEFAULT_CONFIRMATION));
        }

        #[test]
        fn test_deadline_is_delivered_as_entered() {
            let mut form = software_form();
            let entered = (now() + Duration::hours(6)).to_rfc3339();
            form.set_single_value(FieldKey::Deadline, format!(" {entered} "))
                .unwrap();
            let SubmitOutcome::Accepted(payload) = form.submit(now()) else {
                panic!("expected acceptance");
            };
            assert_eq!(payload.deadline, entered);
        }

        #[test]
        fn test_success_resets_to_pristine() {
            let mut form = software_form();
            form.submit(now());
            assert!(form.is_pristine());
            assert_eq!(form.phase(), FormPhase::Succeeded);
            form.acknowledge_success();
            assert_eq!(form, RegistrationForm::new());
            assert_eq!(form.phase(), FormPhase::Unselected);
        }

        #[test]
        fn test_unselected_reports_project_type_without_category_entries() {
            let mut form = RegistrationForm::new();
            let outcome = form.submit(now());
            let SubmitOutcome::Rejected(errors) = outcome else {
                panic!("expected rejection");
            };
            assert!(errors.contains_key(&FieldKey::ProjectType));
            assert!(errors.keys().all(|k| !registry::is_category_field(*k)));
            assert_eq!(form.errors(), &errors);
            assert_eq!(form.phase(), FormPhase::Unselected);
        }

        #[test]
        fn test_consulting_reports_exactly_four_errors() {
            let mut form = RegistrationForm::new();
            form.select_category(Category::Consulting);
            form.set_single_value(FieldKey::ConsultingArea, "TI").unwrap();
            form.set_single_value(FieldKey::PreviousExperience, "")
                .unwrap();
            form.set_single_value(FieldKey::AdditionalComments, "ok")
                .unwrap();
            form.set_single_value(FieldKey::Deadline, yesterday())
                .unwrap();
            form.set_single_value(FieldKey::Budget, "-5").unwrap();
            form.set_single_value(FieldKey::ContactInfo, "").unwrap();

            form.submit(now());
            let keys: Vec<FieldKey> = form.errors().keys().copied().collect();
            assert_eq!(
                keys,
                vec![
                    FieldKey::PreviousExperience,
                    FieldKey::Deadline,
                    FieldKey::Budget,
                    FieldKey::ContactInfo
                ]
            );
            assert_eq!(form.phase(), FormPhase::Failed(Category::Consulting));
        }

        #[test]
        fn test_failure_preserves_values() {
            let mut form = RegistrationForm::new();
            form.select_category(Category::GraphicDesign);
            form.set_single_value(FieldKey::DesignType, "Logo").unwrap();
            form.set_single_value(FieldKey::Budget, "abc").unwrap();
            let values_before = form.values().clone();

            form.submit(now());

            assert_eq!(form.values(), &values_before);
            assert_eq!(form.category(), Category::GraphicDesign);
            assert!(form.error(FieldKey::Budget).is_some());
            assert!(form.success_message().is_none());
        }

        #[test]
        fn test_resubmit_after_fixing_errors() {
            let mut form = RegistrationForm::new();
            form.select_category(Category::SoftwareDevelopment);
            form.set_single_value(FieldKey::ProgrammingLanguage, "Java")
                .unwrap();
            fill_common(&mut form);
            assert!(matches!(form.submit(now()), SubmitOutcome::Rejected(_)));

            form.toggle_multi_value(FieldKey::Frameworks, "React")
                .unwrap();
            assert!(matches!(form.submit(now()), SubmitOutcome::Accepted(_)));
        }

        #[test]
        fn test_custom_confirmation() {
            let mut form = RegistrationForm::with_confirmation("Thanks!");
            form.select_category(Category::SoftwareDevelopment);
            form.set_single_value(FieldKey::ProgrammingLanguage, "Python")
                .unwrap();
            form.toggle_multi_value(FieldKey::Frameworks, "Django")
                .unwrap();
            fill_common(&mut form);
            form.submit(now());
            assert_eq!(form.success_message(), Some("Thanks!"));
        }
    }
}
