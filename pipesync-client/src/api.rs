//! Trait over the remote operations used by the publish workflow

use async_trait::async_trait;
use pipesync_core::domain::{PipelineId, RevisionId};
use pipesync_core::dto::pipeline::{PipelineRef, PipelineSearch};
use pipesync_core::dto::revision::{CreateRevision, RevisionRef};
use pipesync_core::dto::run::{RunReceipt, RunRevision};

use crate::FactoryClient;
use crate::error::Result;

/// Remote pipelines API
///
/// Implemented by `FactoryClient`; services depend on this trait so they can
/// run against an in-memory fake.
#[async_trait]
pub trait FactoryApi: Send + Sync {
    /// Search pipelines by name
    async fn search_pipelines(&self, name: &str) -> Result<PipelineSearch>;

    /// Create a pipeline with the given name
    async fn create_pipeline(&self, name: &str) -> Result<PipelineRef>;

    /// Create a revision of a pipeline
    async fn create_revision(
        &self,
        pipeline_id: &PipelineId,
        req: &CreateRevision,
    ) -> Result<RevisionRef>;

    /// Run a revision of a pipeline
    async fn run_revision(
        &self,
        pipeline_id: &PipelineId,
        revision_id: &RevisionId,
        req: &RunRevision,
    ) -> Result<RunReceipt>;
}

#[async_trait]
impl FactoryApi for FactoryClient {
    async fn search_pipelines(&self, name: &str) -> Result<PipelineSearch> {
        FactoryClient::search_pipelines(self, name).await
    }

    async fn create_pipeline(&self, name: &str) -> Result<PipelineRef> {
        FactoryClient::create_pipeline(self, name).await
    }

    async fn create_revision(
        &self,
        pipeline_id: &PipelineId,
        req: &CreateRevision,
    ) -> Result<RevisionRef> {
        FactoryClient::create_revision(self, pipeline_id, req).await
    }

    async fn run_revision(
        &self,
        pipeline_id: &PipelineId,
        revision_id: &RevisionId,
        req: &RunRevision,
    ) -> Result<RunReceipt> {
        FactoryClient::run_revision(self, pipeline_id, revision_id, req).await
    }
}
