//! Filename collision vocabulary: the choices offered to the user, the
//! per-step decision, and the pure filename rewrites behind each choice.

use std::path::{Component, Path};

use crate::domain::{DomainError, value_objects::ArchiveFormat};

/// What the user can do when the output file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionChoice {
    Overwrite,
    AppendTimestamp,
    Rename,
    Exit,
}

impl CollisionChoice {
    /// Display order of the choices.
    pub const ALL: [Self; 4] = [
        Self::Overwrite,
        Self::AppendTimestamp,
        Self::Rename,
        Self::Exit,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Overwrite => "Overwrite existing file",
            Self::AppendTimestamp => "Rename output file appending the current timestamp",
            Self::Rename => "Rename output file with another name",
            Self::Exit => "Exit",
        }
    }

    pub fn labels() -> [&'static str; 4] {
        Self::ALL.map(|choice| choice.label())
    }

    /// Map a selected index back to a choice. Anything out of range exits.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Self::Exit)
    }
}

/// Result of one round of collision checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Write to this filename.
    Use(String),
    /// Check this filename again.
    Retry(String),
    /// Stop without writing anything.
    Abort,
}

/// Insert `_<millis>` right before the final `.<ext>` segment.
///
/// The extension must be made of ASCII word characters or `-`; a name with no
/// such extension gets the timestamp appended at the end, so the result always
/// differs from the input.
pub fn append_timestamp(filename: &str, millis: i64) -> String {
    match extension_start(filename) {
        Some(dot) => format!("{}_{}{}", &filename[..dot], millis, &filename[dot..]),
        None => format!("{filename}_{millis}"),
    }
}

/// Build `<base>.<format>`. The original extension is not carried over.
pub fn rename_with_format(base: &str, format: ArchiveFormat) -> String {
    format!("{base}.{}", format.extension())
}

/// Reject names that would resolve outside the destination directory when
/// joined onto it: absolute paths, drive prefixes and `..` segments.
pub fn ensure_inside_destination(filename: &str) -> Result<(), DomainError> {
    let escapes = Path::new(filename).components().any(|c| {
        matches!(
            c,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return Err(DomainError::FilenameEscapesDestination(filename.to_string()));
    }
    Ok(())
}

fn extension_start(filename: &str) -> Option<usize> {
    let dot = filename.rfind('.')?;
    let extension = &filename[dot + 1..];
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';

    (!extension.is_empty() && extension.chars().all(is_word)).then_some(dot)
}
