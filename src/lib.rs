#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "CLASSIFY_LINES_LOG";
