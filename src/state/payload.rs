//! Payload handed to the submission sink after a valid submit

use super::forms::FieldValues;
use super::registry::{Category, FieldKey};
use serde::Serialize;

/// Category-specific part of a registration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProjectDetails {
    #[serde(rename_all = "camelCase")]
    SoftwareDevelopment {
        programming_language: String,
        frameworks: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    GraphicDesign {
        design_type: String,
        design_tools: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Consulting {
        consulting_area: String,
        previous_experience: String,
        additional_comments: String,
    },
}

impl ProjectDetails {
    /// Collect the active fields of `category`; `None` while no category is selected
    pub fn from_values(category: Category, values: &FieldValues) -> Option<Self> {
        let text = |key| values.text(key).to_string();
        let choices = |key| values.choices(key).to_vec();
        match category {
            Category::Unselected => None,
            Category::SoftwareDevelopment => Some(Self::SoftwareDevelopment {
                programming_language: text(FieldKey::ProgrammingLanguage),
                frameworks: choices(FieldKey::Frameworks),
            }),
            Category::GraphicDesign => Some(Self::GraphicDesign {
                design_type: text(FieldKey::DesignType),
                design_tools: choices(FieldKey::DesignTools),
            }),
            Category::Consulting => Some(Self::Consulting {
                consulting_area: text(FieldKey::ConsultingArea),
                previous_experience: text(FieldKey::PreviousExperience),
                additional_comments: text(FieldKey::AdditionalComments),
            }),
        }
    }
}

/// A validated project registration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub project_type: Category,
    #[serde(flatten)]
    pub details: ProjectDetails,
    /// Deadline as the user entered it
    pub deadline: String,
    pub budget: f64,
    pub contact_info: String,
}
