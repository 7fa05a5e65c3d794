// crates/ports/src/store.rs
use std::path::Path;

use classify_lines_domain::options::WriteMode;
use classify_lines_shared_kernel::InfraResult;

/// Port for persisting category output files.
pub trait OutputStore: Send + Sync {
    /// Create `dir` and any missing parents.
    fn ensure_dir(&self, dir: &Path) -> InfraResult<()>;

    /// Write every line, newline-terminated, to `path`.
    fn write_lines(&self, path: &Path, lines: &[String], mode: WriteMode) -> InfraResult<()>;

    /// Remove `path`. Returns `false` when there was nothing to remove.
    fn remove(&self, path: &Path) -> InfraResult<bool>;
}
