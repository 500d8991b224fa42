//! Data Transfer Objects for the remote pipelines API
//!
//! Request bodies sent to, and response bodies read from, the remote
//! automation service. Field names follow the service's wire format.

pub mod pipeline;
pub mod revision;
pub mod run;

pub use pipeline::{CreatePipeline, PipelineRef, PipelineSearch};
pub use revision::{CreateRevision, Layout, RevisionRef};
pub use run::{RunReceipt, RunRevision};
