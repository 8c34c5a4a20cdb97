//! On-disk archiver writing zip and tar files.

use std::{
    fs::{File, Metadata},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use zipbuild_core::{
    application::{ApplicationError, ports::Archiver},
    domain::ArchiveFormat,
    error::ZipbuildResult,
};

/// Failures while writing an archive, before they are folded into
/// [`ApplicationError::ArchiveFailed`].
#[derive(Debug, Error)]
enum ArchiveError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Walk(#[from] walkdir::Error),

    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("'{}' is not inside '{}'", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// An entry to store in the archive, in walk order.
#[derive(Debug)]
struct Entry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    mode: u32,
}

/// Permission bits stored in zip entries.
#[cfg(unix)]
fn unix_mode(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn unix_mode(metadata: &Metadata) -> u32 {
    match (metadata.is_dir(), metadata.permissions().readonly()) {
        (true, _) => 0o755,
        (false, true) => 0o444,
        (false, false) => 0o644,
    }
}

/// Production archiver.
///
/// Entries are stored relative to the source directory, so unpacking
/// `app_1.0.0.zip` yields the contents of `build/` rather than a `build/`
/// folder. Walk order is sorted by file name for reproducible archives.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalArchiver;

impl LocalArchiver {
    pub fn new() -> Self {
        Self
    }

    fn collect(source: &Path, destination: &Path) -> Result<Vec<Entry>, ArchiveError> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();

            // The output may live under the source directory.
            if path == destination {
                debug!(path = %path.display(), "skipping archive being written");
                continue;
            }

            let relative = path
                .strip_prefix(source)
                .map_err(|_| ArchiveError::OutsideRoot {
                    path: path.to_path_buf(),
                    root: source.to_path_buf(),
                })?;
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            entries.push(Entry {
                path: path.to_path_buf(),
                name,
                is_dir: entry.file_type().is_dir(),
                mode: unix_mode(&entry.metadata()?),
            });
        }
        Ok(entries)
    }

    fn write_zip(entries: &[Entry], destination: &Path) -> Result<(), ArchiveError> {
        let file = File::create(destination)?;
        let mut writer = ZipWriter::new(BufWriter::new(file));
        let base = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in entries {
            let options = base.unix_permissions(entry.mode);
            if entry.is_dir {
                writer.add_directory(entry.name.as_str(), options)?;
            } else {
                writer.start_file(entry.name.as_str(), options)?;
                let mut input = File::open(&entry.path)?;
                io::copy(&mut input, &mut writer)?;
            }
        }

        writer.finish()?.flush()?;
        Ok(())
    }

    fn write_tar(entries: &[Entry], destination: &Path) -> Result<(), ArchiveError> {
        let file = File::create(destination)?;
        let mut builder = tar::Builder::new(BufWriter::new(file));

        for entry in entries {
            if entry.is_dir {
                builder.append_dir(&entry.name, &entry.path)?;
            } else {
                builder.append_path_with_name(&entry.path, &entry.name)?;
            }
        }

        builder.into_inner()?.flush()?;
        Ok(())
    }
}

impl Archiver for LocalArchiver {
    #[instrument(skip(self), fields(source = %source.display(), destination = %destination.display()))]
    fn archive(
        &self,
        source: &Path,
        destination: &Path,
        format: ArchiveFormat,
    ) -> ZipbuildResult<String> {
        let failed = |e: ArchiveError| ApplicationError::ArchiveFailed {
            destination: destination.to_path_buf(),
            reason: e.to_string(),
        };

        let entries = Self::collect(source, destination).map_err(failed)?;
        match format {
            ArchiveFormat::Zip => Self::write_zip(&entries, destination),
            ArchiveFormat::Tar => Self::write_tar(&entries, destination),
        }
        .map_err(failed)?;

        let files = entries.iter().filter(|e| !e.is_dir).count();
        info!(files, %format, "Archive written");

        Ok(format!(
            "Archived {} {}",
            files,
            if files == 1 { "file" } else { "files" }
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Read;

    use tempfile::TempDir;

    use super::*;

    fn build_dir(temp: &TempDir) -> PathBuf {
        let build = temp.path().join("build");
        fs::create_dir_all(build.join("assets")).unwrap();
        fs::write(build.join("index.html"), "<html></html>").unwrap();
        fs::write(build.join("assets/app.js"), "console.log(1)").unwrap();
        build
    }

    #[test]
    fn zip_contains_relative_entries() {
        let temp = TempDir::new().unwrap();
        let build = build_dir(&temp);
        let dest = temp.path().join("out.zip");

        let message = LocalArchiver::new()
            .archive(&build, &dest, ArchiveFormat::Zip)
            .unwrap();
        assert_eq!(message, "Archived 2 files");

        let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let mut content = String::new();
        archive
            .by_name("assets/app.js")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "console.log(1)");
        assert!(archive.by_name("index.html").is_ok());
    }

    #[test]
    fn tar_contains_relative_entries() {
        let temp = TempDir::new().unwrap();
        let build = build_dir(&temp);
        let dest = temp.path().join("out.tar");

        LocalArchiver::new()
            .archive(&build, &dest, ArchiveFormat::Tar)
            .unwrap();

        let mut archive = tar::Archive::new(File::open(&dest).unwrap());
        let names: Vec<String> = archive
            .entries()
            .unwrap()
            .map(|e| e.unwrap().path().unwrap().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().any(|n| n == "index.html"));
        assert!(names.iter().any(|n| n == "assets/app.js"));
    }

    #[test]
    fn single_file_message_is_singular() {
        let temp = TempDir::new().unwrap();
        let build = temp.path().join("build");
        fs::create_dir(&build).unwrap();
        fs::write(build.join("a.txt"), "a").unwrap();

        let message = LocalArchiver::new()
            .archive(&build, &temp.path().join("a.zip"), ArchiveFormat::Zip)
            .unwrap();
        assert_eq!(message, "Archived 1 file");
    }

    #[test]
    fn missing_destination_dir_is_archive_failure() {
        let temp = TempDir::new().unwrap();
        let build = build_dir(&temp);

        let err = LocalArchiver::new()
            .archive(&build, &temp.path().join("nope/out.zip"), ArchiveFormat::Zip)
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to create archive"));
    }

    #[test]
    fn archive_inside_source_is_not_archived_into_itself() {
        let temp = TempDir::new().unwrap();
        let build = build_dir(&temp);
        let dest = build.join("self.zip");

        LocalArchiver::new()
            .archive(&build, &dest, ArchiveFormat::Zip)
            .unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        assert!(archive.by_name("self.zip").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn zip_keeps_directory_and_executable_modes() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let build = build_dir(&temp);
        fs::set_permissions(build.join("assets"), fs::Permissions::from_mode(0o755)).unwrap();
        fs::write(build.join("run.sh"), "#!/bin/sh\n").unwrap();
        fs::set_permissions(build.join("run.sh"), fs::Permissions::from_mode(0o755)).unwrap();
        let dest = temp.path().join("out.zip");

        LocalArchiver::new()
            .archive(&build, &dest, ArchiveFormat::Zip)
            .unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let assets = archive.by_name("assets/").unwrap();
        assert!(assets.is_dir());
        assert_eq!(assets.unix_mode().map(|m| m & 0o777), Some(0o755));
        drop(assets);

        let script = archive.by_name("run.sh").unwrap();
        assert_eq!(script.unix_mode().map(|m| m & 0o777), Some(0o755));
        drop(script);

        let page = archive.by_name("index.html").unwrap();
        assert_eq!(page.unix_mode().map(|m| m & 0o111), Some(0));
    }
}
