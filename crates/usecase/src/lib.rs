//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`worker`]: classification of a single input file
//! - [`orchestrator`]: worker pool, barrier and aggregation
//! - [`publish`]: output file policy (write, append, remove)
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod publish;
pub mod worker;

#[cfg(test)]
mod testing;

pub use dto::{CategoryPublish, Classification, FileIssue, FileOutcome, PublishAction, PublishReport};
pub use orchestrator::ClassifyFiles;
