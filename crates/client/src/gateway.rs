//! Submission Gateway: writes one completed step to the backend.
//!
//! The endpoint is resolved from the `(role, api key)` table in
//! [`jobport_core::endpoints`]. There are no retries; failures are logged
//! and returned so the caller can keep the wizard on the failed step.

use std::time::Duration;

use serde_json::Value;

use jobport_core::endpoints::{submission_path, ApiKey};
use jobport_core::roles::Role;
use jobport_core::types::Payload;

use crate::backend::PortalBackend;
use crate::error::ClientError;

pub struct SubmissionGateway<B> {
    backend: B,
    submit_delay: Duration,
}

impl<B: PortalBackend> SubmissionGateway<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            submit_delay: Duration::ZERO,
        }
    }

    /// Pause for `delay` after every successful submission.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay
    }

    /// Write `payload` to the endpoint of `(role, api_key)` and wait for
    /// the backend's acknowledgement.
    pub async fn submit(
        &self,
        role: Role,
        api_key: ApiKey,
        payload: &Payload,
    ) -> Result<Value, ClientError> {
        let path = submission_path(role, api_key).inspect_err(|e| {
            tracing::error!(
                %role,
                api_key = api_key.as_str(),
                error = %e,
                "No submission endpoint",
            );
        })?;

        tracing::debug!(%role, path, fields = payload.len(), "Submitting step");

        match self.backend.post_json(path, payload).await {
            Ok(ack) => {
                tracing::info!(%role, path, "Step submitted");
                if !self.submit_delay.is_zero() {
                    tokio::time::sleep(self.submit_delay).await;
                }
                Ok(ack)
            }
            Err(e) => {
                tracing::error!(%role, path, error = %e, "Step submission failed");
                Err(e)
            }
        }
    }
}
