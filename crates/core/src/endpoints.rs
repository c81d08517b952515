//! Backend endpoint table.
//!
//! Maps every `(role, api key)` pair to the path the wizard writes to, and
//! every role to the path its review summary is read from. Pairs with no
//! endpoint are an error, never a fallback to another role's path.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::roles::Role;

pub const GET_USER_INFO: &str = "/api/get-user-info";
pub const CHECK_PERSONAL_INFORMATION_STATUS: &str = "/api/check-personal-information-status";

pub const ADD_JOBSEEKER_STUDENT_PERSONAL_INFORMATION: &str =
    "/api/add-jobseeker-student-personal-information";
pub const ADD_EMPLOYER_PERSONAL_INFORMATION: &str = "/api/add-employer-personal-information";
pub const ADD_ACADEME_PERSONAL_INFORMATION: &str = "/api/add-academe-personal-information";
pub const ADD_JOB_PREFERENCE: &str = "/api/add-jobseeker-student-job-preference";
pub const ADD_LANGUAGE_PROFICIENCY: &str = "/api/add-jobseeker-student-language-proficiency";
pub const ADD_EDUCATIONAL_BACKGROUND: &str = "/api/add-jobseeker-student-educational-background";
pub const ADD_OTHER_TRAINING: &str = "/api/add-jobseeker-student-other-training";
pub const ADD_PROFESSIONAL_LICENSE: &str = "/api/add-jobseeker-student-professional-license";
pub const ADD_WORK_EXPERIENCE: &str = "/api/add-jobseeker-student-work-experience";
pub const ADD_OTHER_SKILLS: &str = "/api/add-jobseeker-student-other-skills";

pub const GET_JOBSEEKER_STUDENT_ALL_DATA: &str = "/api/get-jobseeker-student-all-data";
pub const GET_ACADEME_PERSONAL_INFORMATION: &str = "/api/get-academe-personal-information";
pub const GET_EMPLOYER_PERSONAL_INFORMATION: &str = "/api/get-employer-personal-information";

/// Key naming the backend write a wizard form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiKey {
    PersonalInfo,
    JobPreference,
    LanguageProficiency,
    EducationalBackground,
    OtherTraining,
    ProfessionalLicense,
    WorkExperience,
    OtherSkills,
}

impl ApiKey {
    pub const ALL: [ApiKey; 8] = [
        ApiKey::PersonalInfo,
        ApiKey::JobPreference,
        ApiKey::LanguageProficiency,
        ApiKey::EducationalBackground,
        ApiKey::OtherTraining,
        ApiKey::ProfessionalLicense,
        ApiKey::WorkExperience,
        ApiKey::OtherSkills,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersonalInfo => "personal-info",
            Self::JobPreference => "job-preference",
            Self::LanguageProficiency => "language-proficiency",
            Self::EducationalBackground => "educational-background",
            Self::OtherTraining => "other-training",
            Self::ProfessionalLicense => "professional-license",
            Self::WorkExperience => "work-experience",
            Self::OtherSkills => "other-skills",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown api key '{s}'")))
    }
}

/// Path a step submission is written to.
pub fn submission_path(role: Role, api_key: ApiKey) -> Result<&'static str, CoreError> {
    let unmapped = || CoreError::UnmappedEndpoint {
        role,
        api_key: api_key.as_str(),
    };

    match (api_key, role) {
        (ApiKey::PersonalInfo, Role::Jobseeker | Role::Student) => {
            Ok(ADD_JOBSEEKER_STUDENT_PERSONAL_INFORMATION)
        }
        (ApiKey::PersonalInfo, Role::Employer) => Ok(ADD_EMPLOYER_PERSONAL_INFORMATION),
        (ApiKey::PersonalInfo, Role::Academe) => Ok(ADD_ACADEME_PERSONAL_INFORMATION),
        (ApiKey::PersonalInfo, Role::Admin) => Err(unmapped()),

        (_, Role::Employer | Role::Academe | Role::Admin) => Err(unmapped()),

        (ApiKey::JobPreference, _) => Ok(ADD_JOB_PREFERENCE),
        (ApiKey::LanguageProficiency, _) => Ok(ADD_LANGUAGE_PROFICIENCY),
        (ApiKey::EducationalBackground, _) => Ok(ADD_EDUCATIONAL_BACKGROUND),
        (ApiKey::OtherTraining, _) => Ok(ADD_OTHER_TRAINING),
        (ApiKey::ProfessionalLicense, _) => Ok(ADD_PROFESSIONAL_LICENSE),
        (ApiKey::WorkExperience, _) => Ok(ADD_WORK_EXPERIENCE),
        (ApiKey::OtherSkills, _) => Ok(ADD_OTHER_SKILLS),
    }
}

/// Path the review summary for `role` is read from.
pub fn review_path(role: Role) -> Result<&'static str, CoreError> {
    match role {
        Role::Jobseeker | Role::Student => Ok(GET_JOBSEEKER_STUDENT_ALL_DATA),
        Role::Employer => Ok(GET_EMPLOYER_PERSONAL_INFORMATION),
        Role::Academe => Ok(GET_ACADEME_PERSONAL_INFORMATION),
        Role::Admin => Err(CoreError::UnmappedEndpoint {
            role,
            api_key: "review",
        }),
    }
}
