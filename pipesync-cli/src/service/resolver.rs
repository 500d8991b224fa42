//! Pipeline resolver
//!
//! Finds a pipeline by name, creating it when the search comes back empty.

use pipesync_client::FactoryApi;
use pipesync_core::domain::PipelineId;
use tracing::info;

use super::SyncError;

/// Outcome of resolving a pipeline name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The search returned at least one pipeline; the first one was taken
    Found(PipelineId),
    /// No pipeline matched and a new one was created
    Created(PipelineId),
}

impl Resolution {
    pub fn id(&self) -> &PipelineId {
        match self {
            Resolution::Found(id) | Resolution::Created(id) => id,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Resolution::Created(_))
    }
}

/// Resolve `name` to a pipeline id, creating the pipeline if needed
///
/// Repeated calls with the same name find the pipeline created by the first
/// one. Any failed call stops the resolution; nothing is retried.
pub async fn resolve_or_create<A>(api: &A, name: &str) -> Result<Resolution, SyncError>
where
    A: FactoryApi + ?Sized,
{
    let search = api
        .search_pipelines(name)
        .await
        .map_err(|source| SyncError::Search {
            name: name.to_string(),
            source,
        })?;

    if let Some(existing) = search.pipelines.into_iter().next() {
        info!("Pipeline '{}' exists ({})", name, existing.id);
        return Ok(Resolution::Found(existing.id));
    }

    info!("No pipeline named '{}', creating it", name);
    let created = api
        .create_pipeline(name)
        .await
        .map_err(|source| SyncError::CreatePipeline {
            name: name.to_string(),
            source,
        })?;

    Ok(Resolution::Created(created.id))
}
