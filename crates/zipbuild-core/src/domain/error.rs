// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Unknown archive format '{0}'")]
    UnknownFormat(String),

    #[error("Invalid project metadata: {field} {reason}")]
    InvalidMetadata { field: &'static str, reason: String },

    #[error("Filename template is empty")]
    EmptyTemplate,

    #[error("Output filename '{0}' would be written outside the destination directory")]
    FilenameEscapesDestination(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownFormat(format) => vec![
                format!("'{}' is not a supported archive format", format),
                "Supported formats: zip, tar".into(),
            ],
            Self::InvalidMetadata { field, .. } => vec![
                format!("Check the '{}' entry of your project manifest", field),
                "Both 'name' and 'version' must be non-empty strings".into(),
            ],
            Self::EmptyTemplate => vec![
                "Pass a template with --template, e.g. '%NAME%_%VERSION%.%EXT%'".into(),
            ],
            Self::FilenameEscapesDestination(_) => vec![
                "Use a name relative to the destination directory".into(),
                "Absolute paths and '..' segments are not allowed".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownFormat(_)
            | Self::EmptyTemplate
            | Self::FilenameEscapesDestination(_) => ErrorCategory::Validation,
            Self::InvalidMetadata { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
