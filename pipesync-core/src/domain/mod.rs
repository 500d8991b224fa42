//! Core domain types
//!
//! Local task descriptions as read from disk, the remote steps they are
//! converted into, and the opaque identities handed back by the remote service.

pub mod ids;
pub mod step;
pub mod task;

pub use ids::{PipelineId, RevisionId, RunId};
pub use step::{RemoteStep, StepKind, StepProperties};
pub use task::{PipelineDescription, TaskSpec};
