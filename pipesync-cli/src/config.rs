//! Configuration module
//!
//! The settings of one sync run, built once from flags and environment
//! variables and passed by reference to everything that needs them.

use std::fmt;
use std::path::PathBuf;

/// Default revision comment
pub const DEFAULT_COMMENT: &str = "New Commit";

/// Settings of a sync run
#[derive(Clone)]
pub struct SyncConfig {
    /// Path of the JSON pipeline description
    pub description_path: PathBuf,

    /// Directory holding `<task type>.py` scripts
    pub script_dir: PathBuf,

    /// Base URL of the Factory API (e.g., "https://api.refactr.it/v1")
    pub api_url: String,

    /// Factory project that owns the pipeline
    pub project_id: String,

    /// Name of the remote pipeline to find or create
    pub pipeline_name: String,

    /// Comment attached to the new revision
    pub comment: String,

    /// API access token. Never logged.
    pub auth_token: String,
}

impl SyncConfig {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.description_path.as_os_str().is_empty() {
            anyhow::bail!("description path cannot be empty");
        }

        if self.project_id.trim().is_empty() {
            anyhow::bail!("project_id cannot be empty");
        }

        if self.pipeline_name.trim().is_empty() {
            anyhow::bail!("pipeline name cannot be empty");
        }

        if self.auth_token.trim().is_empty() {
            anyhow::bail!("auth token cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        Ok(())
    }
}

impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("description_path", &self.description_path)
            .field("script_dir", &self.script_dir)
            .field("api_url", &self.api_url)
            .field("project_id", &self.project_id)
            .field("pipeline_name", &self.pipeline_name)
            .field("comment", &self.comment)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}
