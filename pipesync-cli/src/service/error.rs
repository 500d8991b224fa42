//! Sync errors, tagged by the stage that failed

use pipesync_client::ClientError;
use pipesync_core::BuildError;
use pipesync_core::domain::{PipelineId, RevisionId};
use std::fmt;
use thiserror::Error;

/// Stage of a sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Search,
    CreatePipeline,
    Build,
    CreateRevision,
    Run,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Search => "search",
            Stage::CreatePipeline => "create-pipeline",
            Stage::Build => "build",
            Stage::CreateRevision => "create-revision",
            Stage::Run => "run",
        };
        f.write_str(name)
    }
}

/// A failed sync run
///
/// Remote state created by earlier stages is left in place.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to search for pipeline '{name}': {source}")]
    Search { name: String, source: ClientError },

    #[error("Failed to create pipeline '{name}': {source}")]
    CreatePipeline { name: String, source: ClientError },

    #[error("Failed to build steps: {0}")]
    Build(#[from] BuildError),

    #[error("Failed to create revision of pipeline {pipeline_id}: {source}")]
    CreateRevision {
        pipeline_id: PipelineId,
        source: ClientError,
    },

    #[error("Failed to run revision {revision_id} of pipeline {pipeline_id}: {source}")]
    Run {
        pipeline_id: PipelineId,
        revision_id: RevisionId,
        source: ClientError,
    },
}

impl SyncError {
    /// Stage at which the run stopped
    pub fn stage(&self) -> Stage {
        match self {
            SyncError::Search { .. } => Stage::Search,
            SyncError::CreatePipeline { .. } => Stage::CreatePipeline,
            SyncError::Build(_) => Stage::Build,
            SyncError::CreateRevision { .. } => Stage::CreateRevision,
            SyncError::Run { .. } => Stage::Run,
        }
    }

    /// Remote error behind this failure, if any
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            SyncError::Search { source, .. }
            | SyncError::CreatePipeline { source, .. }
            | SyncError::CreateRevision { source, .. }
            | SyncError::Run { source, .. } => Some(source),
            SyncError::Build(_) => None,
        }
    }
}
