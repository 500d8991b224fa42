//! Run trigger

use pipesync_client::FactoryApi;
use pipesync_core::domain::{PipelineId, RevisionId};
use pipesync_core::dto::run::{RunReceipt, RunRevision};
use tracing::info;

use super::SyncError;

/// Start a run of `revision_id` with full telemetry
///
/// Returns once the service has accepted the run.
pub async fn run<A>(
    api: &A,
    pipeline_id: &PipelineId,
    revision_id: &RevisionId,
) -> Result<RunReceipt, SyncError>
where
    A: FactoryApi + ?Sized,
{
    let receipt = api
        .run_revision(pipeline_id, revision_id, &RunRevision::default())
        .await
        .map_err(|source| SyncError::Run {
            pipeline_id: pipeline_id.clone(),
            revision_id: revision_id.clone(),
            source,
        })?;

    match &receipt.id {
        Some(run_id) => info!("Pipeline was started (run {})", run_id),
        None => info!("Pipeline was started"),
    }

    Ok(receipt)
}
