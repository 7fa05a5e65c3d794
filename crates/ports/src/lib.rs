//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: reading input files line by line
//! - [`store`]: persisting per-category output files
//!
//! These ports keep the use cases independent of the filesystem.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod source;
pub mod store;
