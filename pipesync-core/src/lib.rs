//! Pipesync Core
//!
//! Core types and transformations for publishing local pipeline descriptions
//! to a remote automation service.
//!
//! This crate contains:
//! - Domain types: task descriptions, remote steps and remote identities
//! - DTOs: request and response bodies exchanged with the remote service
//! - Template: placeholder translation and the templated env block
//! - Builder: script loading and task-to-step conversion

pub mod builder;
pub mod domain;
pub mod dto;
pub mod error;
pub mod template;

pub use builder::{FsScriptLoader, ScriptLoader, build_steps};
pub use error::BuildError;
