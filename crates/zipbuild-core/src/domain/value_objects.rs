//! Domain value objects.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. This file's only
//! job is to define the types, their string representations, and their
//! `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ArchiveFormat ─────────────────────────────────────────────────────────────

/// Output archive format.
///
/// The identifier doubles as the file extension and as the value of the
/// `%EXT%` template token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveFormat {
    #[default]
    Zip,
    Tar,
}

impl ArchiveFormat {
    pub const ALL: [Self; 2] = [Self::Zip, Self::Tar];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Tar => "tar",
        }
    }

    pub const fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchiveFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zip" => Ok(Self::Zip),
            "tar" => Ok(Self::Tar),
            other => Err(DomainError::UnknownFormat(other.to_string())),
        }
    }
}
