//! Run configuration and outcomes, built once by the caller and threaded
//! through the services.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{ArchiveFormat, FilenameTemplate};

/// Ignore file used when none is configured.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// How the archive should be named and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOptions {
    pub format: ArchiveFormat,
    pub template: FilenameTemplate,
    /// Ask the user for an explicit filename before collision checks.
    pub ask_filename: bool,
    /// Ignore file, relative to the working directory.
    pub ignore_file: PathBuf,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            format: ArchiveFormat::default(),
            template: FilenameTemplate::default(),
            ask_filename: false,
            ignore_file: PathBuf::from(DEFAULT_IGNORE_FILE),
        }
    }
}

/// One packaging run.
///
/// `build_dir` and `zip_dir` are kept as the user gave them; absolute paths
/// are derived against `working_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    pub working_dir: PathBuf,
    pub build_dir: PathBuf,
    pub zip_dir: PathBuf,
    pub options: PackageOptions,
}

impl PackageRequest {
    pub fn new(
        working_dir: impl Into<PathBuf>,
        build_dir: impl Into<PathBuf>,
        zip_dir: impl Into<PathBuf>,
        options: PackageOptions,
    ) -> Self {
        Self {
            working_dir: working_dir.into(),
            build_dir: build_dir.into(),
            zip_dir: zip_dir.into(),
            options,
        }
    }

    pub fn source_path(&self) -> PathBuf {
        self.working_dir.join(&self.build_dir)
    }

    pub fn destination_path(&self) -> PathBuf {
        self.working_dir.join(&self.zip_dir)
    }

    pub fn ignore_file_path(&self) -> PathBuf {
        self.working_dir.join(&self.options.ignore_file)
    }

    /// `zip_dir` as the user typed it, for messages and the ignore file.
    pub fn zip_dir_label(&self) -> String {
        path_label(&self.zip_dir)
    }
}

fn path_label(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// What the setup flow did to the destination directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    AlreadyPresent,
    Created { registered_in_ignore_file: bool },
    Declined,
}

/// Final filename chosen by the collision resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    Aborted,
}

/// Why a run stopped without writing an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbortReason {
    /// The user declined to create the destination directory.
    SetupDeclined,
    /// The user chose "Exit" while resolving a filename collision.
    UserExit,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetupDeclined => f.write_str("destination directory was not created"),
            Self::UserExit => f.write_str("exit chosen while resolving a filename collision"),
        }
    }
}

/// Summary of a written archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    /// Message returned by the archiver.
    pub message: String,
    pub filename: String,
    pub format: ArchiveFormat,
    /// `<zip_dir>/<filename>`, relative to the working directory.
    pub relative_path: String,
    pub archive_path: PathBuf,
}

impl fmt::Display for PackageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.message, self.relative_path)
    }
}

/// Result of a packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageOutcome {
    Completed(PackageReport),
    Aborted(AbortReason),
}
