//! Validation rule and result types.

use serde::{Deserialize, Serialize};

/// A single check applied to one field of a form payload.
///
/// Cross-field rules name their sibling fields by payload key.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    MinValue(f64),
    MaxValue(f64),
    OneOf(&'static [&'static str]),
    Pattern(&'static str),
    Email,
    Url,
    /// Calendar date in `YYYY-MM-DD` form.
    Date,
    Boolean,
    MinItems(usize),
    /// Required only when `field` equals `equals` (case-insensitive).
    RequiredIf {
        field: &'static str,
        equals: &'static str,
    },
    /// Required only when `field` is one of `values`.
    RequiredIfOneOf {
        field: &'static str,
        values: &'static [&'static str],
    },
    /// Date strictly after the date in `field`.
    DateAfter { field: &'static str },
    /// Number greater than or equal to the number in `field`.
    NotLessThan { field: &'static str },
    /// Known province, checked only inside the address cascade.
    Province { country: &'static str },
    /// Municipality of the province in `province`.
    Municipality {
        country: &'static str,
        province: &'static str,
    },
    /// Barangay of the municipality in `municipality`.
    Barangay {
        country: &'static str,
        province: &'static str,
        municipality: &'static str,
    },
}

impl Rule {
    /// Stable rule identifier reported in violations.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength(_) => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::MinValue(_) => "min_value",
            Self::MaxValue(_) => "max_value",
            Self::OneOf(_) => "one_of",
            Self::Pattern(_) => "pattern",
            Self::Email => "email",
            Self::Url => "url",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::MinItems(_) => "min_items",
            Self::RequiredIf { .. } => "required_if",
            Self::RequiredIfOneOf { .. } => "required_if_one_of",
            Self::DateAfter { .. } => "date_after",
            Self::NotLessThan { .. } => "not_less_than",
            Self::Province { .. } => "province",
            Self::Municipality { .. } => "municipality",
            Self::Barangay { .. } => "barangay",
        }
    }

    fn default_message(&self, field: &str) -> String {
        let label = field.replace('_', " ");
        match self {
            Self::Required | Self::RequiredIf { .. } | Self::RequiredIfOneOf { .. } => {
                format!("{label} is required")
            }
            Self::MinLength(n) => format!("{label} must be at least {n} characters"),
            Self::MaxLength(n) => format!("{label} must be at most {n} characters"),
            Self::MinValue(n) => format!("{label} must be at least {n}"),
            Self::MaxValue(n) => format!("{label} must be at most {n}"),
            Self::OneOf(_) => format!("{label} is not one of the allowed values"),
            Self::Pattern(_) => format!("{label} has an invalid format"),
            Self::Email => format!("{label} must be a valid email address"),
            Self::Url => format!("{label} must be a valid URL"),
            Self::Date => format!("{label} must be a date (YYYY-MM-DD)"),
            Self::Boolean => format!("{label} must be yes or no"),
            Self::MinItems(n) => format!("{label} needs at least {n} item(s)"),
            Self::DateAfter { field } => {
                format!("{label} must be after {}", field.replace('_', " "))
            }
            Self::NotLessThan { field } => {
                format!("{label} must not be less than {}", field.replace('_', " "))
            }
            Self::Province { .. } => format!("{label} is not a known province"),
            Self::Municipality { province, .. } => {
                format!("{label} is not in the selected {}", province.replace('_', " "))
            }
            Self::Barangay { municipality, .. } => {
                format!(
                    "{label} is not in the selected {}",
                    municipality.replace('_', " ")
                )
            }
        }
    }

    /// Whether this rule makes the field mandatory regardless of siblings.
    pub fn is_unconditional_requirement(&self) -> bool {
        matches!(self, Self::Required) || matches!(self, Self::MinItems(n) if *n > 0)
    }
}

/// A rule bound to a payload field, with the message shown on failure.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
    pub message: String,
}

impl FieldRule {
    pub fn new(field: &'static str, rule: Rule) -> Self {
        let message = rule.default_message(field);
        Self {
            field,
            rule,
            message,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Aggregated result of evaluating a schema against one payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Violations reported for a single field.
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> {
        self.errors.iter().filter(move |v| v.field == field)
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}
