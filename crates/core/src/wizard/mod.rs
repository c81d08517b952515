//! Multi-step application wizard.
//!
//! [`steps`] holds the static step sequences per role; [`session`] is the
//! step controller that walks one of them.

pub mod session;
pub mod steps;

pub use session::{NextGate, StepSubmission, WizardSession};
pub use steps::{steps_for_role, StepDefinition, StepKind};
