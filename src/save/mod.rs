//! Deciding and writing the single output artifact.
//!
//! [`plan`] is the decision policy (pure, no I/O); [`write_artifact`] is
//! the one filesystem write a run performs.

mod plan;
mod write;

pub use plan::{plan, Artifact, ContentKind, Payload};
pub use write::{write_artifact, SaveError};
