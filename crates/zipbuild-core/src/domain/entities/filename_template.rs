//! Output filename templates.
//!
//! A template is plain text with `%TOKEN%` placeholders. Rendering is a
//! single left-to-right pass: recognised tokens are replaced, everything else
//! (including `%...%` sequences that are not tokens) is copied verbatim.
//! Substituted values are never re-scanned, so a project called `%EXT%`
//! stays `%EXT%`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DomainError, ProjectMetadata};
use crate::domain::value_objects::ArchiveFormat;

/// Template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "%NAME%_%VERSION%.%EXT%";

/// A recognised placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Name,
    Version,
    Extension,
}

impl Placeholder {
    pub const ALL: [Self; 3] = [Self::Name, Self::Version, Self::Extension];

    pub const fn token(&self) -> &'static str {
        match self {
            Self::Name => "%NAME%",
            Self::Version => "%VERSION%",
            Self::Extension => "%EXT%",
        }
    }

    fn value<'a>(&self, metadata: &'a ProjectMetadata, format: ArchiveFormat) -> &'a str {
        match self {
            Self::Name => metadata.name(),
            Self::Version => metadata.version(),
            Self::Extension => format.extension(),
        }
    }

    /// The placeholder `text` starts with, if any.
    fn at_start_of(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| text.starts_with(p.token()))
    }
}

/// Filename template such as `%NAME%_%VERSION%.%EXT%`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    /// Wrap a template string. Empty templates are rejected because they can
    /// never produce a usable filename.
    pub fn new(template: impl Into<String>) -> Result<Self, DomainError> {
        let template = template.into();
        if template.is_empty() {
            return Err(DomainError::EmptyTemplate);
        }
        Ok(Self(template))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute project metadata and the format identifier.
    pub fn render(&self, metadata: &ProjectMetadata, format: ArchiveFormat) -> String {
        let mut rendered = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(start) = rest.find('%') {
            rendered.push_str(&rest[..start]);
            let tail = &rest[start..];

            match Placeholder::at_start_of(tail) {
                Some(placeholder) => {
                    rendered.push_str(placeholder.value(metadata, format));
                    rest = &tail[placeholder.token().len()..];
                }
                None => {
                    // Not a token: keep the '%' and let the next one start a match.
                    rendered.push('%');
                    rest = &tail[1..];
                }
            }
        }

        rendered.push_str(rest);
        rendered
    }
}

impl Default for FilenameTemplate {
    fn default() -> Self {
        Self(DEFAULT_TEMPLATE.to_string())
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for FilenameTemplate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
