//! In-memory port implementations for use case tests.

use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use classify_lines_domain::options::WriteMode;
use classify_lines_ports::{
    source::{LineReader, LineSource},
    store::OutputStore,
};
use classify_lines_shared_kernel::{InfraResult, InfrastructureError};

#[derive(Debug, Clone)]
pub enum StubFile {
    Lines(Vec<String>),
    Missing,
    Directory,
    /// Yields the lines, then an I/O error.
    FailsAfter(Vec<String>),
}

impl StubFile {
    pub fn lines(lines: &[&str]) -> Self {
        Self::Lines(lines.iter().map(|s| (*s).to_owned()).collect())
    }
}

#[derive(Debug, Default)]
pub struct StubSource {
    files: HashMap<PathBuf, StubFile>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, file: StubFile) -> Self {
        self.files.insert(PathBuf::from(path), file);
        self
    }
}

impl LineSource for StubSource {
    fn open(&self, path: &Path) -> InfraResult<LineReader> {
        match self.files.get(path).cloned().unwrap_or(StubFile::Missing) {
            StubFile::Lines(lines) => Ok(Box::new(lines.into_iter().map(Ok::<String, io::Error>))),
            StubFile::Missing => Err(InfrastructureError::InputMissing { path: path.to_path_buf() }),
            StubFile::Directory => Err(InfrastructureError::InputIsDirectory { path: path.to_path_buf() }),
            StubFile::FailsAfter(lines) => {
                let failure = std::iter::once(Err(io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")));
                Ok(Box::new(lines.into_iter().map(Ok::<String, io::Error>).chain(failure)))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    EnsureDir(PathBuf),
    /// Path, number of lines, mode.
    Write(PathBuf, usize, WriteMode),
    Remove(PathBuf),
}

#[derive(Debug, Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<StoreCall>>,
    existing: Mutex<HashSet<PathBuf>>,
    fail_dir: bool,
    fail_write: Option<PathBuf>,
}

impl RecordingStore {
    pub fn with_existing(self, path: PathBuf) -> Self {
        self.existing.lock().unwrap().insert(path);
        self
    }

    pub fn failing_dir(mut self) -> Self {
        self.fail_dir = true;
        self
    }

    pub fn failing_write(mut self, path: PathBuf) -> Self {
        self.fail_write = Some(path);
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl OutputStore for RecordingStore {
    fn ensure_dir(&self, dir: &Path) -> InfraResult<()> {
        self.record(StoreCall::EnsureDir(dir.to_path_buf()));
        if self.fail_dir {
            return Err(InfrastructureError::OutputDirectory {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            });
        }
        Ok(())
    }

    fn write_lines(&self, path: &Path, lines: &[String], mode: WriteMode) -> InfraResult<()> {
        self.record(StoreCall::Write(path.to_path_buf(), lines.len(), mode));
        if self.fail_write.as_deref() == Some(path) {
            return Err(InfrastructureError::FileWrite {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.existing.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn remove(&self, path: &Path) -> InfraResult<bool> {
        self.record(StoreCall::Remove(path.to_path_buf()));
        Ok(self.existing.lock().unwrap().remove(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_are_missing() {
        let source = StubSource::new();
        assert!(matches!(source.open(Path::new("nope")), Err(InfrastructureError::InputMissing { .. })));
    }

    #[test]
    fn store_tracks_written_files() {
        let store = RecordingStore::default();
        store.write_lines(Path::new("a"), &["x".to_owned()], WriteMode::Truncate).unwrap();
        assert!(store.remove(Path::new("a")).unwrap());
        assert!(!store.remove(Path::new("a")).unwrap());
    }
}
