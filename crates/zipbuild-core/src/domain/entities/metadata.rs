use serde::Serialize;

use super::DomainError;

/// Name and version of the project being packaged.
///
/// Read once from the project manifest and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
    name: String,
    version: String,
}

impl ProjectMetadata {
    /// Build metadata, rejecting blank fields.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let version = version.into();

        if name.trim().is_empty() {
            return Err(DomainError::InvalidMetadata {
                field: "name",
                reason: "cannot be empty".into(),
            });
        }
        if version.trim().is_empty() {
            return Err(DomainError::InvalidMetadata {
                field: "version",
                reason: "cannot be empty".into(),
            });
        }

        Ok(Self { name, version })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
