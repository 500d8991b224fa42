//! Pipeline DTOs

use serde::{Deserialize, Serialize};

use crate::domain::PipelineId;

/// Request to create a new pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePipeline {
    pub name: String,
}

/// A pipeline as returned by search and create calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRef {
    #[serde(rename = "_id")]
    pub id: PipelineId,
    #[serde(default)]
    pub name: Option<String>,
}

/// Response of a pipeline search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineSearch {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pipelines: Vec<PipelineRef>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<PipelineRef>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let pipelines: Option<Vec<PipelineRef>> = Option::deserialize(deserializer)?;
    Ok(pipelines.unwrap_or_default())
}
