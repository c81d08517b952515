//! Wizard step definitions and the per-role step sequences.

use serde::{Deserialize, Serialize};

use crate::endpoints::ApiKey;
use crate::roles::Role;

// ---------------------------------------------------------------------------
// Step kinds
// ---------------------------------------------------------------------------

/// Every form the application wizard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    PersonalInformation,
    JobPreference,
    LanguageProficiency,
    EducationalBackground,
    OtherTraining,
    ProfessionalLicense,
    WorkExperience,
    OtherSkills,
    Review,
}

impl StepKind {
    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::PersonalInformation => "Personal Information",
            Self::JobPreference => "Job Preference",
            Self::LanguageProficiency => "Language Proficiency",
            Self::EducationalBackground => "Educational Background",
            Self::OtherTraining => "Other Training",
            Self::ProfessionalLicense => "Professional License",
            Self::WorkExperience => "Work Experience",
            Self::OtherSkills => "Other Skills",
            Self::Review => "Review",
        }
    }

    /// Backend write this form submits to. The review step writes nothing.
    pub fn api_key(self) -> Option<ApiKey> {
        match self {
            Self::PersonalInformation => Some(ApiKey::PersonalInfo),
            Self::JobPreference => Some(ApiKey::JobPreference),
            Self::LanguageProficiency => Some(ApiKey::LanguageProficiency),
            Self::EducationalBackground => Some(ApiKey::EducationalBackground),
            Self::OtherTraining => Some(ApiKey::OtherTraining),
            Self::ProfessionalLicense => Some(ApiKey::ProfessionalLicense),
            Self::WorkExperience => Some(ApiKey::WorkExperience),
            Self::OtherSkills => Some(ApiKey::OtherSkills),
            Self::Review => None,
        }
    }

    /// Section key of this form in the `get-user-info` response.
    pub fn section_key(self) -> Option<&'static str> {
        match self {
            Self::PersonalInformation => Some("personal_information"),
            Self::JobPreference => Some("job_preference"),
            Self::LanguageProficiency => Some("language_proficiency"),
            Self::EducationalBackground => Some("educational_background"),
            Self::OtherTraining => Some("other_training"),
            Self::ProfessionalLicense => Some("professional_license"),
            Self::WorkExperience => Some("work_experience"),
            Self::OtherSkills => Some("other_skills"),
            Self::Review => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Step definitions
// ---------------------------------------------------------------------------

/// Static description of one wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    pub kind: StepKind,
    pub label: &'static str,
    pub api_key: Option<ApiKey>,
    pub can_skip: bool,
}

impl StepDefinition {
    const fn new(
        kind: StepKind,
        label: &'static str,
        api_key: Option<ApiKey>,
        can_skip: bool,
    ) -> Self {
        Self {
            kind,
            label,
            api_key,
            can_skip,
        }
    }
}

const PERSONAL_INFORMATION: StepDefinition = StepDefinition::new(
    StepKind::PersonalInformation,
    "Personal Information",
    Some(ApiKey::PersonalInfo),
    false,
);

const REVIEW: StepDefinition = StepDefinition::new(StepKind::Review, "Review", None, false);

/// Jobseeker and student sequence.
pub static JOBSEEKER_STUDENT_STEPS: [StepDefinition; 9] = [
    PERSONAL_INFORMATION,
    StepDefinition::new(
        StepKind::JobPreference,
        "Job Preference",
        Some(ApiKey::JobPreference),
        false,
    ),
    StepDefinition::new(
        StepKind::LanguageProficiency,
        "Language Proficiency",
        Some(ApiKey::LanguageProficiency),
        false,
    ),
    StepDefinition::new(
        StepKind::EducationalBackground,
        "Educational Background",
        Some(ApiKey::EducationalBackground),
        false,
    ),
    StepDefinition::new(
        StepKind::OtherTraining,
        "Other Training",
        Some(ApiKey::OtherTraining),
        true,
    ),
    StepDefinition::new(
        StepKind::ProfessionalLicense,
        "Professional License",
        Some(ApiKey::ProfessionalLicense),
        true,
    ),
    StepDefinition::new(
        StepKind::WorkExperience,
        "Work Experience",
        Some(ApiKey::WorkExperience),
        true,
    ),
    StepDefinition::new(
        StepKind::OtherSkills,
        "Other Skills",
        Some(ApiKey::OtherSkills),
        true,
    ),
    REVIEW,
];

/// Employer and academe accounts only fill in their organization profile.
pub static ORGANIZATION_STEPS: [StepDefinition; 2] = [PERSONAL_INFORMATION, REVIEW];

/// Step sequence for a role. Empty for admins and for an unresolved role.
pub fn steps_for_role(role: Option<Role>) -> &'static [StepDefinition] {
    match role {
        Some(Role::Jobseeker | Role::Student) => &JOBSEEKER_STUDENT_STEPS,
        Some(Role::Employer | Role::Academe) => &ORGANIZATION_STEPS,
        Some(Role::Admin) | None => &[],
    }
}
