use std::path::{Path, PathBuf};

use classify_lines_domain::{Category, StatisticsSet};
use classify_lines_shared_kernel::{DomainError, InfraResult, InfrastructureError};
use thiserror::Error;

/// Why a file contributed nothing, or only part of its lines.
#[derive(Debug, Error)]
pub enum FileIssue {
    #[error(transparent)]
    Access(#[from] InfrastructureError),

    #[error("Failed to classify '{path}': {source}")]
    Classification {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// Result of one worker: always a complete statistics set, plus the issue that
/// cut the read short, if any.
#[derive(Debug)]
pub struct FileOutcome {
    pub stats: StatisticsSet,
    pub issue: Option<FileIssue>,
}

/// Global statistics after every worker finished and every result was merged.
#[derive(Debug)]
pub struct Classification {
    pub totals: StatisticsSet,
    /// Per-file issues in input order.
    pub issues: Vec<FileIssue>,
    pub files: usize,
}

/// What happened to one category's output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishAction {
    Written { lines: usize },
    /// The category was empty and a stale file was deleted.
    Removed,
    /// The category was empty and no file existed.
    Absent,
    /// The category was empty and the existing file, if any, was left alone.
    Kept,
}

#[derive(Debug)]
pub struct CategoryPublish {
    pub category: Category,
    pub path: PathBuf,
    pub result: InfraResult<PublishAction>,
}

#[derive(Debug, Default)]
pub struct PublishReport {
    pub categories: Vec<CategoryPublish>,
}

impl PublishReport {
    pub fn failures(&self) -> impl Iterator<Item = &InfrastructureError> {
        self.categories.iter().filter_map(|c| c.result.as_ref().err())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn action(&self, category: Category) -> Option<&InfraResult<PublishAction>> {
        self.categories.iter().find(|c| c.category == category).map(|c| &c.result)
    }

    pub fn path(&self, category: Category) -> Option<&Path> {
        self.categories.iter().find(|c| c.category == category).map(|c| c.path.as_path())
    }
}
