//! Review Aggregator: loads the role's saved data for the final step.

use serde_json::Value;

use jobport_core::endpoints::review_path;
use jobport_core::review::{flatten_summary, ReviewSection};
use jobport_core::roles::Role;

use crate::backend::PortalBackend;
use crate::error::ClientError;

pub struct ReviewAggregator<B> {
    backend: B,
}

impl<B: PortalBackend> ReviewAggregator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Raw review response for `role`.
    pub async fn load_raw(&self, role: Role) -> Result<Value, ClientError> {
        let path = review_path(role)?;
        self.backend.get_json(path).await.inspect_err(|e| {
            tracing::error!(%role, path, error = %e, "Failed to load review data");
        })
    }

    /// Review summary for `role`, flattened for display. Any fetch error
    /// fails the whole summary.
    pub async fn load_summary(&self, role: Role) -> Result<Vec<ReviewSection>, ClientError> {
        let data = self.load_raw(role).await?;
        let sections = flatten_summary(&data);
        tracing::debug!(%role, sections = sections.len(), "Review summary loaded");
        Ok(sections)
    }
}
