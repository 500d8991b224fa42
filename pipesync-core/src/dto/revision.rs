//! Revision DTOs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{RemoteStep, RevisionId};

/// Request to create a new revision of a pipeline
///
/// Only `comment` and `steps` vary; `variables`, `outputs` and `layout` are
/// fixed empty scaffolding required by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRevision {
    pub comment: String,
    pub steps: Vec<RemoteStep>,
    pub variables: Vec<Map<String, Value>>,
    pub outputs: Vec<Value>,
    pub layout: Layout,
}

impl CreateRevision {
    pub fn new(comment: impl Into<String>, steps: Vec<RemoteStep>) -> Self {
        Self {
            comment: comment.into(),
            steps,
            variables: vec![Map::new()],
            outputs: Vec::new(),
            layout: Layout::default(),
        }
    }
}

/// Editor layout of a revision
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Layout {
    pub elements: Vec<Value>,
}

/// A revision as returned by the create call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevisionRef {
    #[serde(rename = "_id")]
    pub id: RevisionId,
}
