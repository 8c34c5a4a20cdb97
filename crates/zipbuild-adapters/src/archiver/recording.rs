//! Archiver that records calls instead of writing files.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use zipbuild_core::{
    application::{ApplicationError, ports::Archiver},
    domain::ArchiveFormat,
    error::ZipbuildResult,
};

/// One recorded `archive` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveCall {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub format: ArchiveFormat,
}

/// Test double for [`Archiver`].
///
/// Clones share the call log.
#[derive(Debug, Clone)]
pub struct RecordingArchiver {
    calls: Arc<Mutex<Vec<ArchiveCall>>>,
    message: String,
    failure: Option<String>,
}

impl RecordingArchiver {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            message: "Archived 0 files".into(),
            failure: None,
        }
    }

    /// Message returned from every successful call.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Make every call fail with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn calls(&self) -> Vec<ArchiveCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Default for RecordingArchiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Archiver for RecordingArchiver {
    fn archive(
        &self,
        source: &Path,
        destination: &Path,
        format: ArchiveFormat,
    ) -> ZipbuildResult<String> {
        self.calls
            .lock()
            .map_err(|_| ApplicationError::StateLockError)?
            .push(ArchiveCall {
                source: source.to_path_buf(),
                destination: destination.to_path_buf(),
                format,
            });

        match &self.failure {
            Some(reason) => Err(ApplicationError::ArchiveFailed {
                destination: destination.to_path_buf(),
                reason: reason.clone(),
            }
            .into()),
            None => Ok(self.message.clone()),
        }
    }
}
