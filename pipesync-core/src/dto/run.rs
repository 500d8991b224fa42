//! Run DTOs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::RunId;

/// Request to run a pipeline revision
///
/// The default asks the service for full telemetry: no runtime variables and
/// none of vars, events or outputs suppressed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunRevision {
    pub variables: Map<String, Value>,
    pub suppress_vars: bool,
    pub suppress_events: bool,
    pub suppress_outputs: bool,
}

/// Acceptance payload of a run request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReceipt {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RunId>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}
