//! Revision publisher

use pipesync_client::FactoryApi;
use pipesync_core::domain::{PipelineId, RemoteStep, RevisionId};
use pipesync_core::dto::revision::CreateRevision;
use tracing::info;

use super::SyncError;

/// Publish `steps` as a new revision of `pipeline_id`
pub async fn publish<A>(
    api: &A,
    pipeline_id: &PipelineId,
    steps: Vec<RemoteStep>,
    comment: &str,
) -> Result<RevisionId, SyncError>
where
    A: FactoryApi + ?Sized,
{
    let req = CreateRevision::new(comment, steps);
    info!(
        "Publishing {} step(s) to pipeline {}",
        req.steps.len(),
        pipeline_id
    );

    let revision = api
        .create_revision(pipeline_id, &req)
        .await
        .map_err(|source| SyncError::CreateRevision {
            pipeline_id: pipeline_id.clone(),
            source,
        })?;

    Ok(revision.id)
}
