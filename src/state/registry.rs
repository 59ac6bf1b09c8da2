//! Field registry: which fields each project category activates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Project category chosen at the top of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    #[default]
    Unselected,
    SoftwareDevelopment,
    GraphicDesign,
    Consulting,
}

impl Category {
    /// Concrete categories in display order
    pub const ALL: [Category; 3] = [
        Category::SoftwareDevelopment,
        Category::GraphicDesign,
        Category::Consulting,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unselected => "Select...",
            Self::SoftwareDevelopment => "Software Development",
            Self::GraphicDesign => "Graphic Design",
            Self::Consulting => "Consulting",
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Unselected)
    }

    /// Next category in the selector, wrapping through `Unselected`
    pub fn next(&self) -> Self {
        match self {
            Self::Unselected => Self::SoftwareDevelopment,
            Self::SoftwareDevelopment => Self::GraphicDesign,
            Self::GraphicDesign => Self::Consulting,
            Self::Consulting => Self::Unselected,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Unselected => Self::Consulting,
            Self::SoftwareDevelopment => Self::Unselected,
            Self::GraphicDesign => Self::SoftwareDevelopment,
            Self::Consulting => Self::GraphicDesign,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every field the form knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    ProjectType,
    ProgrammingLanguage,
    Frameworks,
    DesignType,
    DesignTools,
    ConsultingArea,
    PreviousExperience,
    AdditionalComments,
    Deadline,
    Budget,
    ContactInfo,
}

impl FieldKey {
    /// All value-carrying keys; `ProjectType` is held as the category itself
    pub const VALUE_KEYS: [FieldKey; 10] = [
        FieldKey::ProgrammingLanguage,
        FieldKey::Frameworks,
        FieldKey::DesignType,
        FieldKey::DesignTools,
        FieldKey::ConsultingArea,
        FieldKey::PreviousExperience,
        FieldKey::AdditionalComments,
        FieldKey::Deadline,
        FieldKey::Budget,
        FieldKey::ContactInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectType => "projectType",
            Self::ProgrammingLanguage => "programmingLanguage",
            Self::Frameworks => "frameworks",
            Self::DesignType => "designType",
            Self::DesignTools => "designTools",
            Self::ConsultingArea => "consultingArea",
            Self::PreviousExperience => "previousExperience",
            Self::AdditionalComments => "additionalComments",
            Self::Deadline => "deadline",
            Self::Budget => "budget",
            Self::ContactInfo => "contactInfo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProjectType => "Project Type",
            Self::ProgrammingLanguage => "Programming Language",
            Self::Frameworks => "Frameworks",
            Self::DesignType => "Design Type",
            Self::DesignTools => "Tools Used",
            Self::ConsultingArea => "Consulting Area",
            Self::PreviousExperience => "Previous Experience",
            Self::AdditionalComments => "Additional Comments",
            Self::Deadline => "Project Deadline (YYYY-MM-DD)",
            Self::Budget => "Budget",
            Self::ContactInfo => "Contact",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field is entered and how its requiredness is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    SingleSelect,
    MultiSelect,
    FreeText,
    Date,
    Number,
    Contact,
}

impl FieldKind {
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, Self::MultiSelect)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::FreeText)
    }
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub kind: FieldKind,
    pub required: bool,
    /// Choices offered by select kinds, empty otherwise
    pub options: &'static [&'static str],
}

impl FieldSpec {
    const fn new(key: FieldKey, kind: FieldKind, options: &'static [&'static str]) -> Self {
        Self {
            key,
            kind,
            required: true,
            options,
        }
    }

    pub fn label(&self) -> &'static str {
        self.key.label()
    }
}

const SOFTWARE_DEVELOPMENT: &[FieldSpec] = &[
    FieldSpec::new(
        FieldKey::ProgrammingLanguage,
        FieldKind::SingleSelect,
        &["JavaScript", "Python", "Java"],
    ),
    FieldSpec::new(
        FieldKey::Frameworks,
        FieldKind::MultiSelect,
        &["React", "Angular", "Django"],
    ),
];

const GRAPHIC_DESIGN: &[FieldSpec] = &[
    FieldSpec::new(
        FieldKey::DesignType,
        FieldKind::SingleSelect,
        &["Logo", "Advertising Material", "Web Design"],
    ),
    FieldSpec::new(
        FieldKey::DesignTools,
        FieldKind::MultiSelect,
        &["Photoshop", "Illustrator", "Figma"],
    ),
];

const CONSULTING: &[FieldSpec] = &[
    FieldSpec::new(
        FieldKey::ConsultingArea,
        FieldKind::SingleSelect,
        &["IT", "Marketing", "Project Management"],
    ),
    FieldSpec::new(FieldKey::PreviousExperience, FieldKind::FreeText, &[]),
    FieldSpec::new(FieldKey::AdditionalComments, FieldKind::FreeText, &[]),
];

const ALWAYS_REQUIRED: &[FieldSpec] = &[
    FieldSpec::new(FieldKey::Deadline, FieldKind::Date, &[]),
    FieldSpec::new(FieldKey::Budget, FieldKind::Number, &[]),
    FieldSpec::new(FieldKey::ContactInfo, FieldKind::Contact, &[]),
];

/// Fields activated by `category`, in display order
pub fn active_fields(category: Category) -> &'static [FieldSpec] {
    match category {
        Category::Unselected => &[],
        Category::SoftwareDevelopment => SOFTWARE_DEVELOPMENT,
        Category::GraphicDesign => GRAPHIC_DESIGN,
        Category::Consulting => CONSULTING,
    }
}

/// Fields required regardless of category
pub fn always_required_fields() -> &'static [FieldSpec] {
    ALWAYS_REQUIRED
}

/// Look up the spec of any value-carrying field
pub fn spec_for(key: FieldKey) -> Option<&'static FieldSpec> {
    Category::ALL
        .into_iter()
        .flat_map(active_fields)
        .chain(ALWAYS_REQUIRED)
        .find(|spec| spec.key == key)
}

/// Whether `key` belongs to some category's active set
pub fn is_category_field(key: FieldKey) -> bool {
    Category::ALL
        .into_iter()
        .any(|c| active_fields(c).iter().any(|spec| spec.key == key))
}
