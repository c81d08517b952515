//! Async driver for one wizard session.
//!
//! A step advances only after its submission has been acknowledged:
//! `gate_next` validates, the gateway submits and waits, and only then does
//! `commit_next` move the session. A failed write leaves the wizard on the
//! step that failed.

use serde::Deserialize;
use serde_json::Value;

use jobport_core::endpoints::{CHECK_PERSONAL_INFORMATION_STATUS, GET_USER_INFO};
use jobport_core::error::CoreError;
use jobport_core::review::ReviewSection;
use jobport_core::validation::FieldViolation;
use jobport_core::wizard::{NextGate, StepKind, WizardSession};

use crate::backend::PortalBackend;
use crate::error::ClientError;
use crate::gateway::SubmissionGateway;
use crate::review::ReviewAggregator;

/// Result of [`WizardRunner::next`].
#[derive(Debug, Clone, PartialEq)]
pub enum NextOutcome {
    /// The step was submitted and the wizard moved to `index`.
    Advanced { index: usize },
    /// The step is invalid; nothing was submitted.
    Blocked { violations: Vec<FieldViolation> },
    /// Already on the last step (or there are no steps).
    Terminal,
}

/// What [`WizardRunner::prefill`] loaded from the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefillReport {
    pub loaded: Vec<StepKind>,
    pub has_personal_info: bool,
}

#[derive(Debug, Deserialize)]
struct PersonalInfoStatus {
    #[serde(default)]
    has_personal_info: bool,
}

pub struct WizardRunner<B> {
    session: WizardSession,
    gateway: SubmissionGateway<B>,
}

impl<B: PortalBackend> WizardRunner<B> {
    pub fn new(session: WizardSession, gateway: SubmissionGateway<B>) -> Self {
        Self { session, gateway }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    /// Mutable access for field edits.
    pub fn session_mut(&mut self) -> &mut WizardSession {
        &mut self.session
    }

    pub fn gateway(&self) -> &SubmissionGateway<B> {
        &self.gateway
    }

    /// Load previously saved records into their steps and enable jumping
    /// when the account already has personal information.
    ///
    /// The user info and the personal-info status are fetched concurrently.
    /// A session without steps makes no requests.
    pub async fn prefill(&mut self) -> Result<PrefillReport, ClientError> {
        if self.session.steps().is_empty() {
            return Ok(PrefillReport::default());
        }

        let backend = self.gateway.backend();
        let (user_info, status) = futures::try_join!(
            backend.get_json(GET_USER_INFO),
            backend.get_json(CHECK_PERSONAL_INFORMATION_STATUS),
        )
        .inspect_err(|e| {
            tracing::error!(session_id = %self.session.id(), error = %e, "Prefill failed");
        })?;

        let status: PersonalInfoStatus =
            serde_json::from_value(status).map_err(|e| ClientError::Decode {
                path: CHECK_PERSONAL_INFORMATION_STATUS.to_string(),
                message: e.to_string(),
            })?;

        let mut report = PrefillReport {
            has_personal_info: status.has_personal_info,
            ..Default::default()
        };

        for step in self.session.steps() {
            let Some(section) = step.kind.section_key() else {
                continue;
            };
            let record = match user_info.get(section) {
                Some(Value::Array(items)) => items.first(),
                Some(record @ Value::Object(_)) => Some(record),
                _ => None,
            };
            if let Some(Value::Object(data)) = record {
                if self.session.load_step_data(step.kind, data.clone()) {
                    report.loaded.push(step.kind);
                }
            }
        }

        self.session.enable_jump(report.has_personal_info);

        tracing::info!(
            session_id = %self.session.id(),
            loaded = report.loaded.len(),
            has_personal_info = report.has_personal_info,
            "Prefilled wizard",
        );
        Ok(report)
    }

    /// Validate, submit and advance the active step.
    pub async fn next(&mut self) -> Result<NextOutcome, ClientError> {
        let submission = match self.session.gate_next() {
            NextGate::Terminal => return Ok(NextOutcome::Terminal),
            NextGate::Blocked(result) => {
                tracing::debug!(
                    session_id = %self.session.id(),
                    index = self.session.active_index(),
                    violations = result.errors.len(),
                    "Step is not valid yet",
                );
                return Ok(NextOutcome::Blocked {
                    violations: result.errors,
                });
            }
            NextGate::Ready(submission) => submission,
        };

        if let Err(e) = self
            .gateway
            .submit(submission.role, submission.api_key, &submission.payload)
            .await
        {
            tracing::warn!(
                session_id = %self.session.id(),
                index = submission.index,
                "Staying on step after failed submission",
            );
            return Err(e);
        }

        let index = self.session.commit_next(&submission)?;
        tracing::info!(
            session_id = %self.session.id(),
            index,
            step = self.session.active_step().map(|s| s.label),
            "Advanced",
        );
        Ok(NextOutcome::Advanced { index })
    }

    /// Skip the active step without submitting it.
    pub fn skip(&mut self) -> Result<usize, ClientError> {
        let index = self.session.skip()?;
        tracing::info!(session_id = %self.session.id(), index, "Skipped step");
        Ok(index)
    }

    pub fn back(&mut self) -> usize {
        self.session.back()
    }

    pub fn jump(&mut self, index: usize) -> Result<usize, ClientError> {
        Ok(self.session.jump(index)?)
    }

    /// Load the review summary. Only available on the last step.
    pub async fn summary(&self) -> Result<Vec<ReviewSection>, ClientError> {
        let role = self.session.role().ok_or_else(|| {
            CoreError::Navigation("No steps are available for this account".to_string())
        })?;
        if !self.session.is_terminal() {
            return Err(CoreError::Navigation(
                "The review is only available on the last step".to_string(),
            )
            .into());
        }
        ReviewAggregator::new(self.gateway.backend())
            .load_summary(role)
            .await
    }
}
