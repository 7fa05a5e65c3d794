// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ClassifyLinesError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ClassifyLinesError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, ClassifyLinesError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value or a statistics instance of one category was applied to another.
    #[error("Category mismatch: expected {expected}, got {actual}")]
    CategoryMismatch { expected: String, actual: String },

    /// Adding the value would rescale an operand by more than `limit` digits.
    #[error("Decimal scale gap of {gap} digits exceeds the limit of {limit}")]
    ScaleGapTooLarge { gap: u64, limit: u64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to classify input files: {reason}")]
    ClassificationFailed {
        reason: String,
        #[source]
        source: Option<Box<ClassifyLinesError>>,
    },

    #[error("Failed to publish output files: {reason}")]
    PublishFailed {
        reason: String,
        #[source]
        source: Option<Box<ClassifyLinesError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("File '{path}' does not exist, skipping it")]
    InputMissing { path: PathBuf },

    #[error("'{path}' is a directory, not a file")]
    InputIsDirectory { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove file '{path}': {source}")]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Thread pool creation failed: {details}")]
    ThreadPoolCreation { details: String },
}

impl InfrastructureError {
    /// Path the error refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::InputMissing { path }
            | Self::InputIsDirectory { path }
            | Self::FileRead { path, .. }
            | Self::OutputDirectory { path, .. }
            | Self::FileWrite { path, .. }
            | Self::FileRemove { path, .. } => Some(path),
            Self::ThreadPoolCreation { .. } => None,
        }
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ClassifyLinesError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ClassifyLinesError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ClassifyLinesError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
