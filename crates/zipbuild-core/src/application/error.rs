//! Application layer errors.
//!
//! These errors represent failures in orchestration or in the ports, not
//! domain rule violations. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The build output directory does not exist.
    #[error("There is no directory with the name '{}' in your project", path.display())]
    SourceMissing { path: PathBuf },

    /// No supported manifest was found in the project root.
    #[error("No project manifest (package.json or Cargo.toml) found in {}", dir.display())]
    ManifestNotFound { dir: PathBuf },

    /// The manifest exists but lacks a usable name or version.
    #[error("Invalid manifest {}: {reason}", path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// The prompt could not be shown or answered.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The archiver could not produce the output file.
    #[error("Failed to create archive {}: {reason}", destination.display())]
    ArchiveFailed { destination: PathBuf, reason: String },

    /// Adapter state lock poisoned.
    #[error("Adapter state lock poisoned")]
    StateLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceMissing { path } => vec![
                format!("Build your project so that '{}' exists", path.display()),
                "Or pass the build directory explicitly: zipbuild <BUILD_DIR>".into(),
            ],
            Self::ManifestNotFound { .. } => vec![
                "Run zipbuild from the project root".into(),
                "The project name and version are read from package.json or Cargo.toml".into(),
            ],
            Self::InvalidManifest { path, .. } => vec![
                format!("Check the 'name' and 'version' fields in {}", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "zipbuild needs an interactive terminal to ask questions".into(),
                "Run it from a terminal rather than a pipe".into(),
            ],
            Self::ArchiveFailed { .. } => vec![
                "Check available disk space".into(),
                "Ensure every file in the build directory is readable".into(),
            ],
            Self::StateLockError => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceMissing { .. } | Self::ManifestNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidManifest { .. } => ErrorCategory::Configuration,
            Self::PromptFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::ArchiveFailed { .. } | Self::StateLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
