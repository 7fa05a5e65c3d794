#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod category;
pub mod classifier;
pub mod config;
pub mod options;
pub mod statistics;

pub use category::Category;
pub use classifier::{ParsedLine, classify, parse};
pub use statistics::{Average, Measure, Statistics, StatisticsSet};
