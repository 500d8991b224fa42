//! Remote step records

use serde::{Deserialize, Serialize};

/// Step type understood by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    PythonScript,
}

/// Remote representation of one local task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteStep {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub depends: Vec<String>,
    pub properties: StepProperties,
}

/// Script body and templated environment of a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepProperties {
    pub content: String,
    pub env: String,
}

impl RemoteStep {
    /// Create a script step; the step name mirrors its id
    pub fn script(
        id: impl Into<String>,
        depends: Vec<String>,
        content: String,
        env: String,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind: StepKind::PythonScript,
            depends,
            properties: StepProperties { content, env },
        }
    }
}
