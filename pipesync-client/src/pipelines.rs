//! Pipeline-related API endpoints

use crate::FactoryClient;
use crate::error::Result;
use pipesync_core::dto::pipeline::{CreatePipeline, PipelineRef, PipelineSearch};

impl FactoryClient {
    // =============================================================================
    // Pipeline Management
    // =============================================================================

    /// Search the project's pipelines by name
    ///
    /// Matching semantics are the service's own; callers that need a single
    /// pipeline take the first hit.
    pub async fn search_pipelines(&self, name: &str) -> Result<PipelineSearch> {
        let response = self
            .get(&self.pipelines_url)
            .query(&[("search", name)])
            .send()
            .await?;

        let search: PipelineSearch = self.handle_response(response).await?;
        tracing::debug!(
            "Search for '{}' returned {} pipeline(s)",
            name,
            search.pipelines.len()
        );
        Ok(search)
    }

    /// Create a new, empty pipeline
    pub async fn create_pipeline(&self, name: &str) -> Result<PipelineRef> {
        let response = self
            .post(&self.pipelines_url)
            .json(&CreatePipeline {
                name: name.to_string(),
            })
            .send()
            .await?;

        let pipeline: PipelineRef = self.handle_response(response).await?;
        tracing::info!("Created pipeline '{}' ({})", name, pipeline.id);
        Ok(pipeline)
    }
}
