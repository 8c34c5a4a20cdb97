//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use zipbuild_core::{application::ports::Filesystem, error::ZipbuildResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> ZipbuildResult<()> {
        std::fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn append_to_file(&self, path: &Path, content: &str) -> ZipbuildResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file for appending"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn read_to_string(&self, path: &Path) -> ZipbuildResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }
}

fn map_io_error(
    path: &Path,
    e: io::Error,
    operation: &str,
) -> zipbuild_core::error::ZipbuildError {
    use zipbuild_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn append_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");

        LocalFilesystem::new().append_to_file(&path, "\ndist").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "\ndist");
    }

    #[test]
    fn append_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        std::fs::write(&path, "target\nnode_modules").unwrap();

        LocalFilesystem::new().append_to_file(&path, "\ndist").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "target\nnode_modules\ndist"
        );
    }

    #[test]
    fn create_dir_is_single_level() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        assert!(fs.create_dir(&temp.path().join("dist")).is_ok());
        assert!(fs.exists(&temp.path().join("dist")));
        assert!(fs.create_dir(&temp.path().join("a/b")).is_err());
    }

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&temp.path().join("nope"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
