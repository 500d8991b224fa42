//! In-memory `FactoryApi` used by service and workflow tests

use async_trait::async_trait;
use pipesync_client::{ClientError, FactoryApi, Result};
use pipesync_core::domain::{PipelineId, RevisionId, RunId};
use pipesync_core::dto::pipeline::{PipelineRef, PipelineSearch};
use pipesync_core::dto::revision::{CreateRevision, RevisionRef};
use pipesync_core::dto::run::{RunReceipt, RunRevision};
use std::sync::Mutex;

use super::Stage;

/// A call received by the fake
#[derive(Debug, Clone)]
pub enum Call {
    Search(String),
    CreatePipeline(String),
    CreateRevision(PipelineId, CreateRevision),
    Run(PipelineId, RevisionId, RunRevision),
}

impl Call {
    pub fn stage(&self) -> Stage {
        match self {
            Call::Search(_) => Stage::Search,
            Call::CreatePipeline(_) => Stage::CreatePipeline,
            Call::CreateRevision(..) => Stage::CreateRevision,
            Call::Run(..) => Stage::Run,
        }
    }
}

/// Records every call and answers with fixed ids
///
/// Created pipelines get `created-1`, revisions `rev-1`, runs `run-1`.
#[derive(Default)]
pub struct FakeApi {
    existing: Vec<&'static str>,
    fail_at: Option<Stage>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipelines returned by search, in order
    pub fn with_existing(mut self, ids: &[&'static str]) -> Self {
        self.existing = ids.to_vec();
        self
    }

    /// Answer the given stage with a 500
    pub fn failing_at(mut self, stage: Stage) -> Self {
        self.fail_at = Some(stage);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stages(&self) -> Vec<Stage> {
        self.calls().iter().map(Call::stage).collect()
    }

    fn record(&self, call: Call) -> Result<()> {
        let stage = call.stage();
        self.calls.lock().unwrap().push(call);
        if self.fail_at == Some(stage) {
            return Err(ClientError::api_error(500, "Internal Server Error"));
        }
        Ok(())
    }
}

#[async_trait]
impl FactoryApi for FakeApi {
    async fn search_pipelines(&self, name: &str) -> Result<PipelineSearch> {
        self.record(Call::Search(name.to_string()))?;
        Ok(PipelineSearch {
            pipelines: self
                .existing
                .iter()
                .map(|id| PipelineRef {
                    id: PipelineId::new(*id),
                    name: Some(name.to_string()),
                })
                .collect(),
        })
    }

    async fn create_pipeline(&self, name: &str) -> Result<PipelineRef> {
        self.record(Call::CreatePipeline(name.to_string()))?;
        Ok(PipelineRef {
            id: PipelineId::new("created-1"),
            name: Some(name.to_string()),
        })
    }

    async fn create_revision(
        &self,
        pipeline_id: &PipelineId,
        req: &CreateRevision,
    ) -> Result<RevisionRef> {
        self.record(Call::CreateRevision(pipeline_id.clone(), req.clone()))?;
        Ok(RevisionRef {
            id: RevisionId::new("rev-1"),
        })
    }

    async fn run_revision(
        &self,
        pipeline_id: &PipelineId,
        revision_id: &RevisionId,
        req: &RunRevision,
    ) -> Result<RunReceipt> {
        self.record(Call::Run(
            pipeline_id.clone(),
            revision_id.clone(),
            req.clone(),
        ))?;
        Ok(RunReceipt {
            id: Some(RunId::new("run-1")),
            details: Default::default(),
        })
    }
}
