//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `zipbuild-adapters` crate provides implementations; the CLI crate
//! provides the terminal prompter.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{ArchiveFormat, ProjectMetadata};
use crate::error::ZipbuildResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `zipbuild_adapters::filesystem::LocalFilesystem` (production)
/// - `zipbuild_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory. The parent must already exist.
    fn create_dir(&self, path: &Path) -> ZipbuildResult<()>;

    /// Append to a file, creating it if needed. Existing content is kept.
    fn append_to_file(&self, path: &Path, content: &str) -> ZipbuildResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ZipbuildResult<String>;
}

/// Port for interactive questions.
///
/// Every method blocks until the user answers.
///
/// Implemented by:
/// - `zipbuild_cli::prompt::TerminalPrompter` (production)
/// - `zipbuild_adapters::prompter::ScriptedPrompter` (testing)
#[cfg_attr(test, automock)]
pub trait Prompter: Send + Sync {
    /// Yes/no question with a default answer.
    fn confirm(&self, message: &str, default: bool) -> ZipbuildResult<bool>;

    /// Free-text question. May return an empty string.
    fn input(&self, message: &str) -> ZipbuildResult<String>;

    /// Single choice from a list; returns the selected index.
    fn select(&self, message: &str, choices: &[&'static str]) -> ZipbuildResult<usize>;

    /// Show a status line between questions.
    fn notify(&self, message: &str) -> ZipbuildResult<()>;
}

/// Port for archive creation.
///
/// Implemented by:
/// - `zipbuild_adapters::archiver::LocalArchiver` (zip / tar on disk)
/// - `zipbuild_adapters::archiver::RecordingArchiver` (testing)
#[cfg_attr(test, automock)]
pub trait Archiver: Send + Sync {
    /// Pack `source` into `destination` and return a human-readable summary.
    fn archive(
        &self,
        source: &Path,
        destination: &Path,
        format: ArchiveFormat,
    ) -> ZipbuildResult<String>;
}

/// Port for reading project metadata from a manifest.
#[cfg_attr(test, automock)]
pub trait ManifestReader: Send + Sync {
    /// Load name and version from the manifest in `project_root`.
    fn read(&self, project_root: &Path) -> ZipbuildResult<ProjectMetadata>;
}

/// Port for wall-clock time.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}
