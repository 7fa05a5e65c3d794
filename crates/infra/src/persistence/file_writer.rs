// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::Path,
};

use classify_lines_domain::options::WriteMode;
use classify_lines_ports::store::OutputStore;
use classify_lines_shared_kernel::{InfraResult, InfrastructureError};

/// Writes category files to the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsOutputStore;

impl FsOutputStore {
    pub const fn new() -> Self {
        Self
    }

    /// Open `path` for writing, truncating or appending per `mode`.
    pub fn open(path: &Path, mode: WriteMode) -> io::Result<BufWriter<File>> {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        options.open(path).map(BufWriter::new)
    }

    fn write_all(path: &Path, lines: &[String], mode: WriteMode) -> io::Result<()> {
        let mut w = Self::open(path, mode)?;
        for line in lines {
            writeln!(w, "{line}")?;
        }
        w.flush()
    }
}

impl OutputStore for FsOutputStore {
    fn ensure_dir(&self, dir: &Path) -> InfraResult<()> {
        fs::create_dir_all(dir).map_err(|source| InfrastructureError::OutputDirectory { path: dir.to_path_buf(), source })
    }

    fn write_lines(&self, path: &Path, lines: &[String], mode: WriteMode) -> InfraResult<()> {
        Self::write_all(path, lines, mode).map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }

    fn remove(&self, path: &Path) -> InfraResult<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(InfrastructureError::FileRemove { path: path.to_path_buf(), source }),
        }
    }
}
