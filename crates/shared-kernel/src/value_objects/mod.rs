// crates/shared-kernel/src/value_objects/mod.rs
pub mod length;

pub use length::LineLength;
