use std::path::Path;

use classify_lines_domain::StatisticsSet;
use classify_lines_ports::source::LineSource;
use classify_lines_shared_kernel::InfrastructureError;

use crate::dto::{FileIssue, FileOutcome};

/// Classify every non-blank line of one input file.
///
/// Lines are trimmed of ASCII control characters and spaces (every char up to
/// U+0020) on both ends. Other Unicode whitespace such as U+00A0 is kept.
///
/// Never fails: a missing file or a directory yields empty statistics, and a
/// read error keeps whatever was classified before it. Either way the reason
/// is returned in [`FileOutcome::issue`].
pub fn process_file(source: &dyn LineSource, path: &Path) -> FileOutcome {
    let mut stats = StatisticsSet::new();

    let reader = match source.open(path) {
        Ok(reader) => reader,
        Err(err) => {
            log::debug!("skipping {}: {err}", path.display());
            return FileOutcome { stats, issue: Some(err.into()) };
        }
    };

    let mut issue: Option<FileIssue> = None;
    for line in reader {
        let line = match line {
            Ok(line) => line,
            Err(source) => {
                issue = Some(InfrastructureError::FileRead { path: path.to_path_buf(), source }.into());
                break;
            }
        };

        let trimmed = line.trim_matches(|c: char| c <= ' ');
        if trimmed.is_empty() {
            continue;
        }

        if let Err(source) = stats.record_line(trimmed) {
            issue = Some(FileIssue::Classification { path: path.to_path_buf(), source });
            break;
        }
    }

    log::debug!("classified {} lines from {}", stats.total(), path.display());
    FileOutcome { stats, issue }
}
