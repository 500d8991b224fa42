//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod render;
mod sync;

pub use render::RenderArgs;
pub use sync::SyncArgs;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use pipesync_core::domain::PipelineDescription;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_COMMENT;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Publish the description as a new revision and run it
    Sync(SyncArgs),
    /// Print the revision that `sync` would publish, without contacting the service
    Render(RenderArgs),
}

/// Where the pipeline description and its scripts come from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the JSON pipeline description
    #[arg(short, long, env = "PIPELINE_CONFIG_FILE_NAME")]
    pub description: PathBuf,

    /// Directory containing one `<task type>.py` script per task type
    #[arg(short, long, env = "TASK_OPERATION_DIR_PATH", default_value = ".")]
    pub scripts: PathBuf,

    /// Comment attached to the new revision
    #[arg(short, long, env = "PIPELINE_COMMENT", default_value = DEFAULT_COMMENT)]
    pub comment: String,
}

/// Read a pipeline description file
pub fn load_description(path: &Path) -> Result<PipelineDescription> {
    PipelineDescription::load(path)
        .with_context(|| format!("Failed to load pipeline description: {}", path.display()))
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Sync(args) => sync::handle_sync_command(args).await,
        Commands::Render(args) => render::handle_render_command(args),
    }
}
