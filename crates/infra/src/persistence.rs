//! Filesystem adapters for the input and output ports.

pub mod file_reader;
pub mod file_writer;

pub use file_reader::FsLineSource;
pub use file_writer::FsOutputStore;
