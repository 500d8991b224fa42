//! Local pipeline description types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{BuildError, Result};

/// One task of a local pipeline description
///
/// `props` keeps the key order of the description file, which is also the
/// order parameters appear in the generated env block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub needs: Vec<String>,
    #[serde(default)]
    pub props: Map<String, Value>,
}

/// Ordered list of tasks read from a description file
///
/// Ids referenced from `needs` or from cross-task placeholders are assumed to
/// exist; nothing here checks them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineDescription {
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

impl PipelineDescription {
    /// Parse a description from JSON text
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// Read and parse a description file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|e| BuildError::description(path, e))?;
        let description =
            Self::from_json(&source).map_err(|e| BuildError::description(path, e))?;

        tracing::debug!(
            "Loaded {} task(s) from {}",
            description.tasks.len(),
            path.display()
        );

        Ok(description)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
