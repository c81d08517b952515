//! Composable validation schemas.

use super::evaluator::evaluate;
use super::rules::{FieldRule, Rule, ValidationResult};
use crate::types::Payload;

/// An ordered set of field rules, validated together against one payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSchema {
    name: String,
    rules: Vec<FieldRule>,
}

impl ValidationSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Add a rule with its default message.
    pub fn rule(mut self, field: &'static str, rule: Rule) -> Self {
        self.rules.push(FieldRule::new(field, rule));
        self
    }

    /// Add a rule with a custom message.
    pub fn rule_with_message(
        mut self,
        field: &'static str,
        rule: Rule,
        message: impl Into<String>,
    ) -> Self {
        self.rules
            .push(FieldRule::new(field, rule).with_message(message));
        self
    }

    /// Compose two schemas. Rules of `self` come first; identical rules
    /// from `other` are not repeated.
    pub fn union(mut self, other: &ValidationSchema) -> Self {
        for rule in &other.rules {
            if !self.rules.contains(rule) {
                self.rules.push(rule.clone());
            }
        }
        self.name = format!("{}+{}", self.name, other.name);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Every field the schema has at least one rule for, in rule order.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for rule in &self.rules {
            if !fields.contains(&rule.field) {
                fields.push(rule.field);
            }
        }
        fields
    }

    /// Fields that must be filled whatever their siblings hold.
    pub fn required_fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for rule in &self.rules {
            if rule.rule.is_unconditional_requirement() && !fields.contains(&rule.field) {
                fields.push(rule.field);
            }
        }
        fields
    }

    pub fn requires(&self, field: &str) -> bool {
        self.rules
            .iter()
            .any(|r| r.field == field && r.rule.is_unconditional_requirement())
    }

    pub fn validate(&self, data: &Payload) -> ValidationResult {
        evaluate(&self.rules, data)
    }

    pub fn is_valid(&self, data: &Payload) -> bool {
        self.validate(data).is_valid
    }
}
