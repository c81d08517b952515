//! Step controller for one user's pass through the application wizard.
//!
//! The session owns the step sequence of its role, the active index, the
//! form data of every visited step and the validity of the active step.
//! Advancing is a two-phase operation: [`WizardSession::gate_next`] hands
//! out a [`StepSubmission`] once the step may advance, and
//! [`WizardSession::commit_next`] moves forward only after the caller has
//! persisted that submission.
//!
//! Form data is kept in memory for every visited step, so going back and
//! forth never discards edits.

use serde_json::Value;
use uuid::Uuid;

use super::steps::{steps_for_role, StepDefinition, StepKind};
use crate::address::{clear_descendants, ADDRESS_GROUPS};
use crate::endpoints::ApiKey;
use crate::error::CoreError;
use crate::roles::Role;
use crate::types::Payload;
use crate::validation::{schema_for_step, ValidationResult};

/// Data of one step, ready to be written to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSubmission {
    pub index: usize,
    pub kind: StepKind,
    pub role: Role,
    pub api_key: ApiKey,
    pub payload: Payload,
}

/// Outcome of asking whether the active step may advance.
#[derive(Debug, Clone, PartialEq)]
pub enum NextGate {
    /// The step may advance once this submission is persisted.
    Ready(StepSubmission),
    /// The active step fails validation and cannot be skipped.
    Blocked(ValidationResult),
    /// The active step is the last one (or there are no steps).
    Terminal,
}

#[derive(Debug, Clone)]
pub struct WizardSession {
    id: Uuid,
    role: Option<Role>,
    loading: bool,
    steps: &'static [StepDefinition],
    active_index: usize,
    step_state: Vec<Option<Payload>>,
    validation: ValidationResult,
    finished_fill_up: Option<usize>,
    jump_enabled: bool,
}

impl WizardSession {
    /// Start a session for a resolved role.
    pub fn for_role(role: Role) -> Self {
        Self::with_steps(Some(role), false)
    }

    /// Start a session from the auth store's role string.
    ///
    /// An unrecognized role yields a session with no steps; the host must
    /// then show its "no steps available" screen.
    pub fn from_role_name(name: &str) -> Self {
        match Role::parse(name) {
            Ok(role) => Self::for_role(role),
            Err(_) => Self::with_steps(None, false),
        }
    }

    /// Placeholder used while the auth check is still resolving the role.
    pub fn loading() -> Self {
        Self::with_steps(None, true)
    }

    fn with_steps(role: Option<Role>, loading: bool) -> Self {
        let steps = steps_for_role(role);
        let mut session = Self {
            id: Uuid::new_v4(),
            role,
            loading,
            steps,
            active_index: 0,
            step_state: vec![None; steps.len()],
            validation: ValidationResult::valid(),
            finished_fill_up: None,
            jump_enabled: false,
        };
        if !steps.is_empty() {
            session.enter(0);
        }
        session
    }

    // ---- accessors ----

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn steps(&self) -> &'static [StepDefinition] {
        self.steps
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_step(&self) -> Option<&'static StepDefinition> {
        self.steps.get(self.active_index)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// No steps for this account; only logging out is possible.
    pub fn is_dead_end(&self) -> bool {
        !self.loading && self.steps.is_empty()
    }

    /// The active step is the review step and offers no `next`.
    pub fn is_terminal(&self) -> bool {
        !self.steps.is_empty() && self.active_index == self.steps.len() - 1
    }

    pub fn has_next(&self) -> bool {
        !self.steps.is_empty() && !self.is_terminal()
    }

    pub fn finished_fill_up(&self) -> Option<usize> {
        self.finished_fill_up
    }

    pub fn jump_enabled(&self) -> bool {
        self.jump_enabled
    }

    pub fn active_data(&self) -> Option<&Payload> {
        self.step_data(self.active_index)
    }

    pub fn step_data(&self, index: usize) -> Option<&Payload> {
        self.step_state.get(index).and_then(Option::as_ref)
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }

    // ---- editing ----

    /// Set one field of the active step and revalidate.
    ///
    /// Changing an address field that already held a value clears every
    /// field below it in the same address group.
    pub fn set_field(
        &mut self,
        field: &str,
        value: Value,
    ) -> Result<&ValidationResult, CoreError> {
        Self::apply_field(self.active_data_mut()?, field, value);
        self.revalidate();
        Ok(&self.validation)
    }

    /// Set several fields of the active step at once and revalidate.
    ///
    /// Address fields are applied first, each group from country down to
    /// its most specific field, so a new province never clears the new
    /// municipality given alongside it.
    pub fn set_fields(&mut self, mut fields: Payload) -> Result<&ValidationResult, CoreError> {
        let data = self.active_data_mut()?;
        for group in ADDRESS_GROUPS {
            for field in group.fields {
                if let Some(value) = fields.remove(*field) {
                    Self::apply_field(data, field, value);
                }
            }
        }
        for (field, value) in fields {
            Self::apply_field(data, &field, value);
        }
        self.revalidate();
        Ok(&self.validation)
    }

    fn apply_field(data: &mut Payload, field: &str, value: Value) {
        let changed = data
            .get(field)
            .is_some_and(|old| !old.is_null() && *old != value);
        data.insert(field.to_string(), value);
        if changed {
            clear_descendants(data, field);
        }
    }

    /// Remove one field of the active step and revalidate.
    pub fn remove_field(&mut self, field: &str) -> Result<&ValidationResult, CoreError> {
        let data = self.active_data_mut()?;
        if data.remove(field).is_some() {
            clear_descendants(data, field);
        }
        self.revalidate();
        Ok(&self.validation)
    }

    /// Replace the stored data of the step of `kind`, e.g. with a record
    /// previously saved on the backend. Returns `false` when this session
    /// has no such step.
    pub fn load_step_data(&mut self, kind: StepKind, payload: Payload) -> bool {
        let Some(index) = self.steps.iter().position(|s| s.kind == kind) else {
            return false;
        };
        self.step_state[index] = Some(payload);
        if index == self.active_index {
            self.revalidate();
        }
        true
    }

    fn active_data_mut(&mut self) -> Result<&mut Payload, CoreError> {
        if self.steps.is_empty() {
            return Err(CoreError::Navigation(
                "No steps are available for this account".to_string(),
            ));
        }
        Ok(self.step_state[self.active_index].get_or_insert_with(Payload::new))
    }

    fn revalidate(&mut self) {
        self.validation = match (self.active_step(), self.role) {
            (Some(step), Some(role)) => match schema_for_step(step.kind, role) {
                Some(schema) => {
                    let empty = Payload::new();
                    schema.validate(self.active_data().unwrap_or(&empty))
                }
                None => ValidationResult::valid(),
            },
            _ => ValidationResult::valid(),
        };
    }

    // ---- navigation ----

    fn enter(&mut self, index: usize) {
        self.active_index = index;
        if self.step_state[index].is_none() {
            self.step_state[index] = Some(Payload::new());
        }
        self.revalidate();
    }

    fn mark_finished(&mut self, index: usize) {
        self.finished_fill_up = Some(self.finished_fill_up.map_or(index, |f| f.max(index)));
    }

    /// Go back one step. A no-op on the first step.
    pub fn back(&mut self) -> usize {
        if self.active_index > 0 {
            self.enter(self.active_index - 1);
        }
        self.active_index
    }

    /// Decide whether the active step may advance.
    ///
    /// Skippable steps bypass the validity gate.
    pub fn gate_next(&self) -> NextGate {
        let (Some(step), Some(role)) = (self.active_step(), self.role) else {
            return NextGate::Terminal;
        };
        if self.is_terminal() {
            return NextGate::Terminal;
        }
        let Some(api_key) = step.api_key else {
            return NextGate::Terminal;
        };
        if !self.validation.is_valid && !step.can_skip {
            return NextGate::Blocked(self.validation.clone());
        }
        NextGate::Ready(StepSubmission {
            index: self.active_index,
            kind: step.kind,
            role,
            api_key,
            payload: self.active_data().cloned().unwrap_or_default(),
        })
    }

    /// Advance after `submission` has been persisted.
    ///
    /// Rejects submissions that do not belong to the active step, so a
    /// stale or duplicated write cannot move the wizard twice.
    pub fn commit_next(&mut self, submission: &StepSubmission) -> Result<usize, CoreError> {
        let active_kind = self.active_step().map(|s| s.kind);
        if submission.index != self.active_index || Some(submission.kind) != active_kind {
            return Err(CoreError::Navigation(format!(
                "Submission for step {} does not match active step {}",
                submission.index, self.active_index
            )));
        }
        if !self.has_next() {
            return Err(CoreError::Navigation(
                "The last step has no next step".to_string(),
            ));
        }
        self.mark_finished(self.active_index);
        self.enter(self.active_index + 1);
        Ok(self.active_index)
    }

    /// Skip the active step without validating or submitting it.
    pub fn skip(&mut self) -> Result<usize, CoreError> {
        let step = self.active_step().ok_or_else(|| {
            CoreError::Navigation("No steps are available for this account".to_string())
        })?;
        if !step.can_skip {
            return Err(CoreError::Navigation(format!(
                "Step '{}' cannot be skipped",
                step.label
            )));
        }
        if !self.has_next() {
            return Err(CoreError::Navigation(
                "The last step has no next step".to_string(),
            ));
        }
        self.mark_finished(self.active_index);
        self.enter(self.active_index + 1);
        Ok(self.active_index)
    }

    /// Record the backend's "has existing personal info" answer. Existing
    /// applicants may jump to any step.
    pub fn enable_jump(&mut self, has_personal_info: bool) {
        self.jump_enabled = has_personal_info;
    }

    /// Whether [`jump`](Self::jump) to `index` would be accepted.
    ///
    /// Without existing personal info only the first step and steps already
    /// committed through `next` or `skip` are reachable.
    pub fn can_jump_to(&self, index: usize) -> bool {
        if index >= self.steps.len() {
            return false;
        }
        if self.jump_enabled || index == 0 {
            return true;
        }
        self.finished_fill_up.is_some_and(|f| index <= f)
    }

    pub fn jump(&mut self, index: usize) -> Result<usize, CoreError> {
        if !self.can_jump_to(index) {
            return Err(CoreError::Navigation(format!(
                "Cannot jump to step {index} (steps: {}, filled up to: {:?})",
                self.steps.len(),
                self.finished_fill_up
            )));
        }
        self.enter(index);
        Ok(self.active_index)
    }
}
