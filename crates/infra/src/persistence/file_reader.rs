use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    vec,
};

use classify_lines_ports::source::{LineReader, LineSource};
use classify_lines_shared_kernel::{InfraResult, InfrastructureError};

/// Reads input files from the local filesystem, one line at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLineSource;

impl FsLineSource {
    pub const fn new() -> Self {
        Self
    }

    /// Open `path` with buffered reading after checking what lives there.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        if !path.exists() {
            return Err(InfrastructureError::InputMissing { path: path.to_path_buf() });
        }
        if path.is_dir() {
            return Err(InfrastructureError::InputIsDirectory { path: path.to_path_buf() });
        }
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }
}

impl LineSource for FsLineSource {
    fn open(&self, path: &Path) -> InfraResult<LineReader> {
        Ok(Box::new(TerminatedLines::new(Self::open_buffered(path)?)))
    }
}

/// Lines ended by `\n`, `\r\n` or a lone `\r`, without the terminator.
///
/// Invalid UTF-8 surfaces as an `InvalidData` item.
struct TerminatedLines<R> {
    reader: R,
    pending: vec::IntoIter<String>,
}

impl<R: BufRead> TerminatedLines<R> {
    fn new(reader: R) -> Self {
        Self { reader, pending: Vec::new().into_iter() }
    }

    fn fill(&mut self) -> io::Result<bool> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(false);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        let text = String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pending = text.split('\r').map(str::to_owned).collect::<Vec<_>>().into_iter();
        Ok(true)
    }
}

impl<R: BufRead> Iterator for TerminatedLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.next() {
                return Some(Ok(line));
            }
            match self.fill() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
