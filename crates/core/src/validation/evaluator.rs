//! Rule evaluator — pure logic, no network access.
//!
//! Absent values (missing key, `null`, blank string) pass every rule except
//! the requirement rules, so optional fields are only checked when filled.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use validator::{ValidateEmail, ValidateUrl};

use super::rules::{FieldRule, FieldViolation, Rule, ValidationResult};
use crate::address::cascade_applies;
use crate::reference::address::find_province;
use crate::types::Payload;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Compiled `Rule::Pattern` regexes, keyed by pattern. `None` marks a
/// pattern that failed to compile.
static PATTERNS: LazyLock<Mutex<HashMap<&'static str, Option<Regex>>>> =
    LazyLock::new(Default::default);

/// Evaluate all rules against a single payload.
pub fn evaluate(rules: &[FieldRule], data: &Payload) -> ValidationResult {
    let errors: Vec<FieldViolation> = rules
        .iter()
        .filter_map(|rule| evaluate_single_rule(rule, data))
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn evaluate_single_rule(rule: &FieldRule, data: &Payload) -> Option<FieldViolation> {
    let raw = data.get(rule.field);
    let value = present(raw);

    let passed = match &rule.rule {
        Rule::Required => value.is_some(),
        Rule::RequiredIf { field, equals } => {
            !text(data.get(*field)).is_some_and(|s| s.eq_ignore_ascii_case(equals))
                || value.is_some()
        }
        Rule::RequiredIfOneOf { field, values } => {
            !text(data.get(*field)).is_some_and(|s| values.contains(&s)) || value.is_some()
        }
        Rule::MinItems(min) => match raw {
            Some(Value::Array(items)) => items.len() >= *min,
            _ => *min == 0,
        },
        _ => match value {
            None => true,
            Some(v) => check_present(&rule.rule, v, data),
        },
    };

    if passed {
        None
    } else {
        Some(FieldViolation {
            field: rule.field.to_string(),
            rule_type: rule.rule.name().to_string(),
            message: rule.message.clone(),
            value: raw.cloned(),
        })
    }
}

/// Checks that only run once the field holds a value.
fn check_present(rule: &Rule, value: &Value, data: &Payload) -> bool {
    match rule {
        Rule::MinLength(min) => value.as_str().map_or(true, |s| s.chars().count() >= *min),
        Rule::MaxLength(max) => value.as_str().map_or(true, |s| s.chars().count() <= *max),
        Rule::MinValue(min) => number(Some(value)).is_some_and(|n| n >= *min),
        Rule::MaxValue(max) => number(Some(value)).is_some_and(|n| n <= *max),
        Rule::OneOf(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
        Rule::Pattern(pattern) => pattern_matches(*pattern, value),
        Rule::Email => value.as_str().is_some_and(|s| s.to_string().validate_email()),
        Rule::Url => value.as_str().is_some_and(|s| s.to_string().validate_url()),
        Rule::Date => date(Some(value)).is_some(),
        Rule::Boolean => value.is_boolean(),
        Rule::DateAfter { field } => match (date(Some(value)), date(data.get(*field))) {
            (Some(this), Some(other)) => this > other,
            _ => true,
        },
        Rule::NotLessThan { field } => match (number(Some(value)), number(data.get(*field))) {
            (Some(this), Some(other)) => this >= other,
            _ => true,
        },
        Rule::Province { country } => {
            !cascade_applies(text(data.get(*country)))
                || value.as_str().is_some_and(|s| find_province(s).is_some())
        }
        Rule::Municipality { country, province } => {
            if !cascade_applies(text(data.get(*country))) {
                return true;
            }
            let Some(province) = text(data.get(*province)).and_then(find_province) else {
                return false;
            };
            value
                .as_str()
                .is_some_and(|s| province.find_municipality(s).is_some())
        }
        Rule::Barangay {
            country,
            province,
            municipality,
        } => {
            if !cascade_applies(text(data.get(*country))) {
                return true;
            }
            let barangays = text(data.get(*province))
                .and_then(find_province)
                .and_then(|p| text(data.get(*municipality)).and_then(|m| p.find_municipality(m)))
                .map(|m| m.barangays.as_slice())
                .unwrap_or_default();
            value
                .as_str()
                .is_some_and(|s| barangays.iter().any(|b| b.eq_ignore_ascii_case(s.trim())))
        }
        Rule::Required
        | Rule::RequiredIf { .. }
        | Rule::RequiredIfOneOf { .. }
        | Rule::MinItems(_) => true,
    }
}

// ---- value helpers ----

/// An invalid pattern passes every value.
fn pattern_matches(pattern: &'static str, value: &Value) -> bool {
    let mut patterns = PATTERNS.lock().unwrap_or_else(PoisonError::into_inner);
    match patterns
        .entry(pattern)
        .or_insert_with(|| Regex::new(pattern).ok())
    {
        Some(re) => value.as_str().is_some_and(|s| re.is_match(s)),
        None => true,
    }
}

/// `None` for a missing key, `null`, blank string or empty array.
fn present(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::Array(a)) if a.is_empty() => None,
        Some(v) => Some(v),
    }
}

fn text(value: Option<&Value>) -> Option<&str> {
    present(value).and_then(Value::as_str).map(str::trim)
}

/// Numbers arrive either as JSON numbers or as numeric strings from inputs.
fn number(value: Option<&Value>) -> Option<f64> {
    match present(value)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn date(value: Option<&Value>) -> Option<NaiveDate> {
    text(value).and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    fn check(field: &'static str, rule: Rule, payload: Value) -> ValidationResult {
        evaluate(&[FieldRule::new(field, rule)], &data(payload))
    }

    // -- requirement rules --

    #[test]
    fn required_passes_with_value() {
        assert!(check("name", Rule::Required, json!({"name": "Ana"})).is_valid);
    }

    #[test]
    fn required_fails_missing_null_or_blank() {
        assert!(!check("name", Rule::Required, json!({})).is_valid);
        assert!(!check("name", Rule::Required, json!({"name": null})).is_valid);
        assert!(!check("name", Rule::Required, json!({"name": "   "})).is_valid);
    }

    #[test]
    fn required_violation_reports_rule_and_field() {
        let result = check("name", Rule::Required, json!({}));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "name");
        assert_eq!(result.errors[0].rule_type, "required");
    }

    #[test]
    fn required_if_only_applies_on_sentinel() {
        let rule = Rule::RequiredIf {
            field: "country",
            equals: "Philippines",
        };
        assert!(!check("province", rule.clone(), json!({"country": "Philippines"})).is_valid);
        assert!(!check("province", rule.clone(), json!({"country": "philippines"})).is_valid);
        assert!(check("province", rule.clone(), json!({"country": "Japan"})).is_valid);
        assert!(check(
            "province",
            rule,
            json!({"country": "Philippines", "province": "Abra"})
        )
        .is_valid);
    }

    #[test]
    fn required_if_one_of() {
        let rule = Rule::RequiredIfOneOf {
            field: "level",
            values: &["College", "Post-Graduate"],
        };
        assert!(!check("course", rule.clone(), json!({"level": "College"})).is_valid);
        assert!(check("course", rule, json!({"level": "Elementary"})).is_valid);
    }

    #[test]
    fn min_items_requires_array_length() {
        assert!(check("skills", Rule::MinItems(1), json!({"skills": ["Driver"]})).is_valid);
        assert!(!check("skills", Rule::MinItems(1), json!({"skills": []})).is_valid);
        assert!(!check("skills", Rule::MinItems(1), json!({})).is_valid);
    }

    // -- value rules --

    #[test]
    fn optional_fields_skip_value_rules() {
        assert!(check("email", Rule::Email, json!({})).is_valid);
        assert!(check("email", Rule::Email, json!({"email": ""})).is_valid);
    }

    #[test]
    fn length_rules_count_characters() {
        assert!(check("name", Rule::MaxLength(4), json!({"name": "Niño"})).is_valid);
        assert!(!check("name", Rule::MaxLength(3), json!({"name": "Niño"})).is_valid);
        assert!(!check("name", Rule::MinLength(5), json!({"name": "Niño"})).is_valid);
    }

    #[test]
    fn numeric_rules_accept_numeric_strings() {
        assert!(check("hours", Rule::MinValue(1.0), json!({"hours": "8"})).is_valid);
        assert!(!check("hours", Rule::MinValue(1.0), json!({"hours": 0})).is_valid);
        assert!(!check("hours", Rule::MaxValue(10.0), json!({"hours": 11})).is_valid);
        assert!(!check("hours", Rule::MinValue(1.0), json!({"hours": "many"})).is_valid);
    }

    #[test]
    fn one_of_rejects_unknown_values() {
        let rule = Rule::OneOf(&["Male", "Female"]);
        assert!(check("sex", rule.clone(), json!({"sex": "Female"})).is_valid);
        assert!(!check("sex", rule, json!({"sex": "Other"})).is_valid);
    }

    #[test]
    fn pattern_matches_regex() {
        let rule = Rule::Pattern(r"^\d{4}$");
        assert!(check("zip", rule.clone(), json!({"zip": "2800"})).is_valid);
        assert!(!check("zip", rule, json!({"zip": "28000"})).is_valid);
    }

    #[test]
    fn patterns_are_compiled_once() {
        let rule = Rule::Pattern(r"^09\d{9}$");
        for number in ["09171234567", "09181234567"] {
            assert!(check("mobile", rule.clone(), json!({ "mobile": number })).is_valid);
        }
        let patterns = PATTERNS.lock().unwrap();
        assert!(matches!(patterns.get(r"^09\d{9}$"), Some(Some(_))));
    }

    #[test]
    fn invalid_pattern_silently_passes() {
        assert!(check("zip", Rule::Pattern("(unclosed"), json!({"zip": "x"})).is_valid);
    }

    #[test]
    fn email_and_url() {
        assert!(check("email", Rule::Email, json!({"email": "ana@example.com"})).is_valid);
        assert!(!check("email", Rule::Email, json!({"email": "ana-at-example"})).is_valid);
        assert!(check("site", Rule::Url, json!({"site": "https://example.com"})).is_valid);
        assert!(!check("site", Rule::Url, json!({"site": "not a url"})).is_valid);
    }

    #[test]
    fn date_and_boolean() {
        assert!(check("dob", Rule::Date, json!({"dob": "1999-02-28"})).is_valid);
        assert!(!check("dob", Rule::Date, json!({"dob": "1999-02-30"})).is_valid);
        assert!(check("ofw", Rule::Boolean, json!({"ofw": false})).is_valid);
        assert!(!check("ofw", Rule::Boolean, json!({"ofw": "no"})).is_valid);
    }

    // -- cross-field rules --

    #[test]
    fn date_after_is_strict() {
        let rule = Rule::DateAfter { field: "date_from" };
        let later = json!({"date_from": "2020-01-01", "date_to": "2020-06-01"});
        let same = json!({"date_from": "2020-01-01", "date_to": "2020-01-01"});
        let earlier = json!({"date_from": "2020-01-01", "date_to": "2019-12-31"});
        assert!(check("date_to", rule.clone(), later).is_valid);
        assert!(!check("date_to", rule.clone(), same).is_valid);
        assert!(!check("date_to", rule, earlier).is_valid);
    }

    #[test]
    fn date_after_passes_when_sibling_missing() {
        let rule = Rule::DateAfter { field: "date_from" };
        assert!(check("date_to", rule, json!({"date_to": "2020-01-01"})).is_valid);
    }

    #[test]
    fn not_less_than_compares_numbers() {
        let rule = Rule::NotLessThan { field: "salary_from" };
        assert!(check(
            "salary_to",
            rule.clone(),
            json!({"salary_from": 15000, "salary_to": "20000"})
        )
        .is_valid);
        assert!(!check(
            "salary_to",
            rule,
            json!({"salary_from": 15000, "salary_to": 10000})
        )
        .is_valid);
    }

    // -- address rules --

    fn province_rule() -> Rule {
        Rule::Province { country: "country" }
    }

    fn municipality_rule() -> Rule {
        Rule::Municipality {
            country: "country",
            province: "province",
        }
    }

    fn barangay_rule() -> Rule {
        Rule::Barangay {
            country: "country",
            province: "province",
            municipality: "municipality",
        }
    }

    #[test]
    fn province_must_exist_inside_cascade() {
        assert!(check(
            "province",
            province_rule(),
            json!({"country": "Philippines", "province": "abra"})
        )
        .is_valid);
        assert!(!check(
            "province",
            province_rule(),
            json!({"country": "Philippines", "province": "Gotham"})
        )
        .is_valid);
    }

    #[test]
    fn address_rules_ignored_outside_cascade() {
        assert!(check(
            "province",
            province_rule(),
            json!({"country": "Japan", "province": "Tokyo"})
        )
        .is_valid);
        assert!(check(
            "municipality",
            municipality_rule(),
            json!({"country": "Japan", "municipality": "Shibuya"})
        )
        .is_valid);
    }

    #[test]
    fn municipality_must_belong_to_province() {
        let ok = json!({"country": "Philippines", "province": "Abra", "municipality": "Bangued"});
        let wrong = json!({
            "country": "Philippines",
            "province": "Benguet",
            "municipality": "Bangued",
        });
        assert!(check("municipality", municipality_rule(), ok).is_valid);
        assert!(!check("municipality", municipality_rule(), wrong).is_valid);
    }

    #[test]
    fn barangay_must_belong_to_municipality() {
        let ok = json!({
            "country": "Philippines",
            "province": "Nueva Ecija",
            "municipality": "San Isidro",
            "barangay": "Mangga",
        });
        let wrong = json!({
            "country": "Philippines",
            "province": "Abra",
            "municipality": "San Isidro",
            "barangay": "Mangga",
        });
        assert!(check("barangay", barangay_rule(), ok).is_valid);
        assert!(!check("barangay", barangay_rule(), wrong).is_valid);
    }

    #[test]
    fn evaluate_collects_every_violation() {
        let rules = vec![
            FieldRule::new("first_name", Rule::Required),
            FieldRule::new("email", Rule::Required),
            FieldRule::new("email", Rule::Email),
        ];
        let result = evaluate(&rules, &data(json!({"email": "bad"})));
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors_for("email").count(), 1);
    }
}
