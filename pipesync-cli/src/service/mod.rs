//! Service layer
//!
//! One service per remote stage of a sync: resolving the pipeline,
//! publishing a revision and triggering its run. Services take the remote
//! API as a `FactoryApi` so they can be exercised against a fake.

mod error;
mod publisher;
mod resolver;
mod trigger;

#[cfg(test)]
pub(crate) mod fake;

pub use error::{Stage, SyncError};
pub use publisher::publish;
pub use resolver::{Resolution, resolve_or_create};
pub use trigger::run;
