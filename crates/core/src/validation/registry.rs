//! Schema registry.
//!
//! The personal-information form composes a shared base schema with
//! role-specific extensions. Every other wizard form owns an independent
//! schema that does not depend on the role.

use super::rules::Rule;
use super::schema::ValidationSchema;
use crate::reference::catalog;
use crate::roles::Role;
use crate::types::CASCADE_COUNTRY;
use crate::wizard::steps::StepKind;

/// Philippine mobile number, local or international form.
pub const MOBILE_PATTERN: &str = r"^(09|\+639)\d{9}$";

/// Four-digit Philippine postal code.
pub const ZIP_CODE_PATTERN: &str = r"^\d{4}$";

/// Tax identification number, with optional branch code.
pub const TIN_PATTERN: &str = r"^\d{3}-\d{3}-\d{3}(-\d{3,5})?$";

pub const LANDLINE_PATTERN: &str = r"^\(?\d{2,3}\)?[- ]?\d{3,4}[- ]?\d{4}$";

const NAME_MAX: usize = 50;
const TEXT_MAX: usize = 150;

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Personal-information schema for a role.
pub fn schema_for_role(role: Role) -> ValidationSchema {
    match role {
        Role::Jobseeker | Role::Student => base_schema().union(&jobseeker_schema()),
        Role::Employer => base_schema()
            .union(&employer_schema())
            .union(&employer_academe_shared_schema()),
        Role::Academe => base_schema()
            .union(&academe_schema())
            .union(&employer_academe_shared_schema()),
        Role::Admin => base_schema(),
    }
}

/// Schema for a wizard form. The review step has none.
pub fn schema_for_step(kind: StepKind, role: Role) -> Option<ValidationSchema> {
    let schema = match kind {
        StepKind::PersonalInformation => schema_for_role(role),
        StepKind::JobPreference => job_preference_schema(),
        StepKind::LanguageProficiency => language_proficiency_schema(),
        StepKind::EducationalBackground => educational_background_schema(),
        StepKind::OtherTraining => other_training_schema(),
        StepKind::ProfessionalLicense => professional_license_schema(),
        StepKind::WorkExperience => work_experience_schema(),
        StepKind::OtherSkills => other_skills_schema(),
        StepKind::Review => return None,
    };
    Some(schema)
}

// ---------------------------------------------------------------------------
// Personal information
// ---------------------------------------------------------------------------

/// Fields every account fills in, including the permanent address.
pub fn base_schema() -> ValidationSchema {
    ValidationSchema::new("base")
        .rule("first_name", Rule::Required)
        .rule("first_name", Rule::MaxLength(NAME_MAX))
        .rule("middle_name", Rule::MaxLength(NAME_MAX))
        .rule("last_name", Rule::Required)
        .rule("last_name", Rule::MaxLength(NAME_MAX))
        .rule("email", Rule::Required)
        .rule("email", Rule::Email)
        .rule("contact_number", Rule::Required)
        .rule_with_message(
            "contact_number",
            Rule::Pattern(MOBILE_PATTERN),
            "contact number must look like 09XXXXXXXXX or +639XXXXXXXXX",
        )
        .rule("country", Rule::Required)
        .rule("country", Rule::OneOf(catalog::COUNTRIES))
        .rule(
            "province",
            Rule::RequiredIf {
                field: "country",
                equals: CASCADE_COUNTRY,
            },
        )
        .rule("province", Rule::Province { country: "country" })
        .rule(
            "municipality",
            Rule::RequiredIf {
                field: "country",
                equals: CASCADE_COUNTRY,
            },
        )
        .rule(
            "municipality",
            Rule::Municipality {
                country: "country",
                province: "province",
            },
        )
        .rule(
            "barangay",
            Rule::RequiredIf {
                field: "country",
                equals: CASCADE_COUNTRY,
            },
        )
        .rule(
            "barangay",
            Rule::Barangay {
                country: "country",
                province: "province",
                municipality: "municipality",
            },
        )
        .rule("zip_code", Rule::Pattern(ZIP_CODE_PATTERN))
}

/// Jobseeker and student profile, including the temporary address.
pub fn jobseeker_schema() -> ValidationSchema {
    ValidationSchema::new("jobseeker")
        .rule("date_of_birth", Rule::Required)
        .rule("date_of_birth", Rule::Date)
        .rule("place_of_birth", Rule::MaxLength(TEXT_MAX))
        .rule("sex", Rule::Required)
        .rule("sex", Rule::OneOf(catalog::SEXES))
        .rule("civil_status", Rule::Required)
        .rule("civil_status", Rule::OneOf(catalog::CIVIL_STATUSES))
        .rule("employment_status", Rule::Required)
        .rule("employment_status", Rule::OneOf(catalog::EMPLOYMENT_STATUSES))
        .rule("height_cm", Rule::MinValue(50.0))
        .rule("height_cm", Rule::MaxValue(250.0))
        .rule("is_ofw", Rule::Boolean)
        .rule("is_4ps_beneficiary", Rule::Boolean)
        .rule("has_disability", Rule::Boolean)
        .rule("temporary_country", Rule::OneOf(catalog::COUNTRIES))
        .rule(
            "temporary_province",
            Rule::RequiredIf {
                field: "temporary_country",
                equals: CASCADE_COUNTRY,
            },
        )
        .rule(
            "temporary_province",
            Rule::Province {
                country: "temporary_country",
            },
        )
        .rule(
            "temporary_municipality",
            Rule::RequiredIf {
                field: "temporary_country",
                equals: CASCADE_COUNTRY,
            },
        )
        .rule(
            "temporary_municipality",
            Rule::Municipality {
                country: "temporary_country",
                province: "temporary_province",
            },
        )
        .rule(
            "temporary_barangay",
            Rule::RequiredIf {
                field: "temporary_country",
                equals: CASCADE_COUNTRY,
            },
        )
        .rule(
            "temporary_barangay",
            Rule::Barangay {
                country: "temporary_country",
                province: "temporary_province",
                municipality: "temporary_municipality",
            },
        )
}

pub fn employer_schema() -> ValidationSchema {
    ValidationSchema::new("employer")
        .rule("company_name", Rule::Required)
        .rule("company_name", Rule::MaxLength(TEXT_MAX))
        .rule("employer_type", Rule::Required)
        .rule("employer_type", Rule::OneOf(catalog::EMPLOYER_TYPES))
        .rule("company_type", Rule::Required)
        .rule("company_type", Rule::OneOf(catalog::COMPANY_TYPES))
        .rule("industry", Rule::Required)
        .rule("industry", Rule::OneOf(catalog::INDUSTRIES))
        .rule("total_work_force", Rule::Required)
        .rule("total_work_force", Rule::OneOf(catalog::WORK_FORCE_SIZES))
}

pub fn academe_schema() -> ValidationSchema {
    ValidationSchema::new("academe")
        .rule("institution_name", Rule::Required)
        .rule("institution_name", Rule::MaxLength(TEXT_MAX))
        .rule("institution_type", Rule::Required)
        .rule("institution_type", Rule::OneOf(catalog::INSTITUTION_TYPES))
        .rule("accreditation_number", Rule::MaxLength(NAME_MAX))
}

/// Contact-person and organization fields common to employers and schools.
pub fn employer_academe_shared_schema() -> ValidationSchema {
    ValidationSchema::new("employer_academe_shared")
        .rule("position", Rule::Required)
        .rule("position", Rule::MaxLength(TEXT_MAX))
        .rule("tin", Rule::Pattern(TIN_PATTERN))
        .rule("landline", Rule::Pattern(LANDLINE_PATTERN))
        .rule("website", Rule::Url)
}

// ---------------------------------------------------------------------------
// Per-step forms
// ---------------------------------------------------------------------------

pub fn job_preference_schema() -> ValidationSchema {
    ValidationSchema::new("job_preference")
        .rule("job_title", Rule::Required)
        .rule("job_title", Rule::MaxLength(TEXT_MAX))
        .rule("industry", Rule::OneOf(catalog::INDUSTRIES))
        .rule("preferred_country", Rule::Required)
        .rule("preferred_country", Rule::OneOf(catalog::COUNTRIES))
        .rule(
            "preferred_province",
            Rule::RequiredIf {
                field: "preferred_country",
                equals: CASCADE_COUNTRY,
            },
        )
        .rule(
            "preferred_province",
            Rule::Province {
                country: "preferred_country",
            },
        )
        .rule(
            "preferred_municipality",
            Rule::Municipality {
                country: "preferred_country",
                province: "preferred_province",
            },
        )
        .rule("salary_from", Rule::MinValue(0.0))
        .rule("salary_to", Rule::MinValue(0.0))
        .rule("salary_to", Rule::NotLessThan { field: "salary_from" })
}

pub fn language_proficiency_schema() -> ValidationSchema {
    ValidationSchema::new("language_proficiency")
        .rule("language", Rule::Required)
        .rule("language", Rule::OneOf(catalog::LANGUAGES))
        .rule("read", Rule::Boolean)
        .rule("write", Rule::Boolean)
        .rule("speak", Rule::Boolean)
        .rule("understand", Rule::Boolean)
}

pub fn educational_background_schema() -> ValidationSchema {
    ValidationSchema::new("educational_background")
        .rule("education_level", Rule::Required)
        .rule("education_level", Rule::OneOf(catalog::EDUCATION_LEVELS))
        .rule("school_name", Rule::Required)
        .rule("school_name", Rule::MaxLength(TEXT_MAX))
        .rule(
            "course",
            Rule::RequiredIfOneOf {
                field: "education_level",
                values: catalog::LEVELS_WITH_COURSE,
            },
        )
        .rule("course", Rule::MaxLength(TEXT_MAX))
        .rule("field_of_study", Rule::OneOf(catalog::FIELDS_OF_STUDY))
        .rule("date_from", Rule::Required)
        .rule("date_from", Rule::Date)
        .rule("date_to", Rule::Date)
        .rule("date_to", Rule::DateAfter { field: "date_from" })
}

pub fn other_training_schema() -> ValidationSchema {
    ValidationSchema::new("other_training")
        .rule("training_title", Rule::Required)
        .rule("training_title", Rule::MaxLength(TEXT_MAX))
        .rule("institution", Rule::Required)
        .rule("date_from", Rule::Required)
        .rule("date_from", Rule::Date)
        .rule("date_to", Rule::Required)
        .rule("date_to", Rule::Date)
        .rule("date_to", Rule::DateAfter { field: "date_from" })
        .rule("hours", Rule::MinValue(1.0))
        .rule("certificate", Rule::MaxLength(TEXT_MAX))
}

pub fn professional_license_schema() -> ValidationSchema {
    ValidationSchema::new("professional_license")
        .rule("license_type", Rule::Required)
        .rule("license_type", Rule::OneOf(catalog::LICENSE_TYPES))
        .rule("license_name", Rule::Required)
        .rule("license_name", Rule::MaxLength(TEXT_MAX))
        .rule("date_issued", Rule::Required)
        .rule("date_issued", Rule::Date)
        .rule("valid_until", Rule::Date)
        .rule("valid_until", Rule::DateAfter { field: "date_issued" })
        .rule("rating", Rule::MinValue(0.0))
        .rule("rating", Rule::MaxValue(100.0))
}

pub fn work_experience_schema() -> ValidationSchema {
    ValidationSchema::new("work_experience")
        .rule("company_name", Rule::Required)
        .rule("company_name", Rule::MaxLength(TEXT_MAX))
        .rule("company_address", Rule::MaxLength(200))
        .rule("position", Rule::Required)
        .rule("position", Rule::MaxLength(TEXT_MAX))
        .rule("employment_status", Rule::Required)
        .rule("employment_status", Rule::OneOf(catalog::WORK_EMPLOYMENT_STATUSES))
        .rule("date_from", Rule::Required)
        .rule("date_from", Rule::Date)
        .rule("date_to", Rule::Date)
        .rule("date_to", Rule::DateAfter { field: "date_from" })
}

pub fn other_skills_schema() -> ValidationSchema {
    ValidationSchema::new("other_skills")
        .rule_with_message("skills", Rule::MinItems(1), "select at least one skill")
        .rule("other_skill", Rule::MaxLength(100))
}
