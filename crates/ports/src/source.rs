// crates/ports/src/source.rs
use std::path::Path;

use classify_lines_shared_kernel::InfraResult;

/// Lines of one opened input, without their `\n`, `\r\n` or lone `\r`
/// terminators. An `Err` item ends the read.
pub type LineReader = Box<dyn Iterator<Item = std::io::Result<String>> + Send>;

/// Port for opening input files.
pub trait LineSource: Send + Sync {
    /// Open `path` for line-by-line reading.
    ///
    /// Fails with `InputMissing` when nothing exists at `path`, with
    /// `InputIsDirectory` for directories and with `FileRead` when the file
    /// cannot be opened.
    fn open(&self, path: &Path) -> InfraResult<LineReader>;
}
