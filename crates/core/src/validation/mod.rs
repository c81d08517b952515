//! Form validation engine.
//!
//! Provides rule types, a pure-logic evaluator, composable schemas and the
//! registry that picks the schema for a role or wizard form.

pub mod evaluator;
pub mod registry;
pub mod rules;
pub mod schema;

pub use registry::{schema_for_role, schema_for_step};
pub use rules::{FieldRule, FieldViolation, Rule, ValidationResult};
pub use schema::ValidationSchema;
