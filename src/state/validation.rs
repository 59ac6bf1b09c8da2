//! Submit-time validation rules

use super::forms::FieldValues;
use super::payload::{ProjectDetails, RegistrationPayload};
use super::registry::{active_fields, Category, FieldKey, FieldKind, FieldSpec};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Field key -> user-facing message, empty iff the form is valid
pub type ErrorMap = BTreeMap<FieldKey, String>;

/// Outcome of one validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ErrorMap),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Valid => None,
            Self::Invalid(errors) => Some(errors),
        }
    }
}

/// Message shown when `key` fails its rule
pub fn message_for(key: FieldKey) -> &'static str {
    match key {
        FieldKey::ProjectType => "Project type is required.",
        FieldKey::ProgrammingLanguage => "Programming language is required.",
        FieldKey::Frameworks => "At least one framework must be selected.",
        FieldKey::DesignType => "Design type is required.",
        FieldKey::DesignTools => "At least one tool must be selected.",
        FieldKey::ConsultingArea => "Consulting area is required.",
        FieldKey::PreviousExperience => "Previous experience is required.",
        FieldKey::AdditionalComments => "Additional comments are required.",
        FieldKey::Deadline => "Deadline must be a future date.",
        FieldKey::Budget => "Budget must be a positive number.",
        FieldKey::ContactInfo => "Contact information is required.",
    }
}

/// Parse a deadline entered as `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a budget, accepting only finite numbers greater than zero
pub fn parse_budget(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|b| b.is_finite() && *b > 0.0)
}

fn is_missing(spec: &FieldSpec, values: &FieldValues) -> bool {
    match spec.kind {
        FieldKind::MultiSelect => values.choices(spec.key).is_empty(),
        FieldKind::FreeText | FieldKind::Contact => values.text(spec.key).trim().is_empty(),
        FieldKind::SingleSelect | FieldKind::Date | FieldKind::Number => {
            values.text(spec.key).is_empty()
        }
    }
}

/// Run every applicable rule, collecting all failures, and assemble the payload on success
pub fn check(
    category: Category,
    values: &FieldValues,
    now: DateTime<Utc>,
) -> Result<RegistrationPayload, ErrorMap> {
    let mut errors = ErrorMap::new();
    let mut fail = |key: FieldKey| {
        errors.insert(key, message_for(key).to_string());
    };

    if !category.is_selected() {
        fail(FieldKey::ProjectType);
    }

    for spec in active_fields(category) {
        if spec.required && is_missing(spec, values) {
            fail(spec.key);
        }
    }

    let deadline = values.text(FieldKey::Deadline).trim();
    if !parse_deadline(deadline).is_some_and(|d| d > now) {
        fail(FieldKey::Deadline);
    }

    let budget = parse_budget(values.text(FieldKey::Budget));
    if budget.is_none() {
        fail(FieldKey::Budget);
    }

    let contact_info = values.text(FieldKey::ContactInfo);
    if contact_info.trim().is_empty() {
        fail(FieldKey::ContactInfo);
    }

    match (ProjectDetails::from_values(category, values), budget) {
        (Some(details), Some(budget)) if errors.is_empty() => Ok(RegistrationPayload {
            project_type: category,
            details,
            deadline: deadline.to_string(),
            budget,
            contact_info: contact_info.to_string(),
        }),
        _ => Err(errors),
    }
}

/// Validate without keeping the assembled payload
pub fn validate(
    category: Category,
    values: &FieldValues,
    now: DateTime<Utc>,
) -> ValidationResult {
    match check(category, values, now) {
        Ok(_) => ValidationResult::Valid,
        Err(errors) => ValidationResult::Invalid(errors),
    }
}
