//! Revision-related API endpoints

use crate::FactoryClient;
use crate::error::Result;
use pipesync_core::domain::{PipelineId, RevisionId};
use pipesync_core::dto::revision::{CreateRevision, RevisionRef};
use pipesync_core::dto::run::{RunReceipt, RunRevision};

impl FactoryClient {
    // =============================================================================
    // Revision Lifecycle
    // =============================================================================

    /// Publish a new revision of a pipeline
    ///
    /// # Arguments
    /// * `pipeline_id` - The pipeline receiving the revision
    /// * `req` - Steps and scaffolding of the revision
    pub async fn create_revision(
        &self,
        pipeline_id: &PipelineId,
        req: &CreateRevision,
    ) -> Result<RevisionRef> {
        let url = format!("{}/{}/revisions", self.pipelines_url, pipeline_id);
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!(
                "New revision data: {}",
                serde_json::to_string(req).unwrap_or_default()
            );
        }

        let response = self.post(&url).json(req).send().await?;

        let revision: RevisionRef = self.handle_response(response).await?;
        tracing::info!("Created revision {} of pipeline {}", revision.id, pipeline_id);
        Ok(revision)
    }

    /// Run a revision of a pipeline
    ///
    /// Returns as soon as the service accepts the run; completion is not
    /// awaited.
    pub async fn run_revision(
        &self,
        pipeline_id: &PipelineId,
        revision_id: &RevisionId,
        req: &RunRevision,
    ) -> Result<RunReceipt> {
        let url = format!(
            "{}/{}/revisions/{}/run",
            self.pipelines_url, pipeline_id, revision_id
        );

        let response = self.post(&url).json(req).send().await?;

        let receipt: RunReceipt = self.handle_optional_response(response).await?;
        tracing::info!("Run of revision {} accepted", revision_id);
        Ok(receipt)
    }
}
