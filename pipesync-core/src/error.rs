//! Error types for local pipeline processing

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for build operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors raised while reading a description or building steps from it
#[derive(Debug, Error)]
pub enum BuildError {
    /// The script body for a task type could not be read
    #[error("Script for task '{task_id}' (type '{task_type}') not found at {}: {source}", path.display())]
    ScriptNotFound {
        task_id: String,
        task_type: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pipeline description could not be read or parsed
    #[error("Invalid pipeline description {}: {message}", path.display())]
    DescriptionError { path: PathBuf, message: String },
}

impl BuildError {
    pub(crate) fn description(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::DescriptionError {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
