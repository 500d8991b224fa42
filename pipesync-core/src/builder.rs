//! Step builder
//!
//! Converts a local pipeline description into the ordered list of remote
//! steps, embedding each task's script body and its templated env block.

use std::path::PathBuf;

use crate::domain::{PipelineDescription, RemoteStep, TaskSpec};
use crate::error::{BuildError, Result};
use crate::template::EnvBlock;

/// Source of script bodies, keyed by task type
pub trait ScriptLoader {
    /// Load the script body for `task`
    ///
    /// # Errors
    /// Returns `BuildError::ScriptNotFound` when no body exists for the
    /// task's type.
    fn load(&self, task: &TaskSpec) -> Result<String>;
}

/// Loads `<dir>/<type>.py` from disk, one read per call
#[derive(Debug, Clone)]
pub struct FsScriptLoader {
    dir: PathBuf,
}

impl FsScriptLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the script for a task type
    pub fn script_path(&self, task_type: &str) -> PathBuf {
        self.dir.join(format!("{}.py", task_type))
    }
}

impl ScriptLoader for FsScriptLoader {
    fn load(&self, task: &TaskSpec) -> Result<String> {
        let path = self.script_path(&task.task_type);
        tracing::debug!("Loading script for task '{}' from {}", task.id, path.display());

        std::fs::read_to_string(&path).map_err(|source| BuildError::ScriptNotFound {
            task_id: task.id.clone(),
            task_type: task.task_type.clone(),
            path,
            source,
        })
    }
}

/// Build the remote steps for every task of a description
///
/// Output order equals input order and each step's `depends` is the task's
/// `needs` as written. Any script that fails to load aborts the whole build.
/// An empty description yields an empty list with a warning.
///
/// # Example
/// ```no_run
/// use pipesync_core::domain::PipelineDescription;
/// use pipesync_core::{FsScriptLoader, build_steps};
///
/// let description = PipelineDescription::load("pipeline.json")?;
/// let steps = build_steps(&description, &FsScriptLoader::new("./operations"))?;
/// println!("{} step(s)", steps.len());
/// # Ok::<(), pipesync_core::BuildError>(())
/// ```
pub fn build_steps<L>(description: &PipelineDescription, loader: &L) -> Result<Vec<RemoteStep>>
where
    L: ScriptLoader + ?Sized,
{
    if description.is_empty() {
        tracing::warn!("No tasks in the pipeline description");
        return Ok(Vec::new());
    }

    description
        .tasks
        .iter()
        .map(|task| build_step(task, loader))
        .collect()
}

fn build_step<L>(task: &TaskSpec, loader: &L) -> Result<RemoteStep>
where
    L: ScriptLoader + ?Sized,
{
    let content = loader.load(task)?;
    let env = EnvBlock::from_props(&task.props);

    Ok(RemoteStep::script(
        task.id.clone(),
        task.needs.clone(),
        content,
        env.to_string(),
    ))
}
