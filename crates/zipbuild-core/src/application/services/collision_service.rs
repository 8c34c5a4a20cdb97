//! Collision Resolver - pick an output filename that does not silently
//! overwrite an existing file.
//!
//! Each round checks the candidate and, on a collision, asks the user what
//! to do. Renames loop back for another check, so the resolver runs until it
//! reaches a free name, an explicit overwrite, or an exit. There is no round
//! limit.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Clock, Filesystem, Prompter},
        request::Resolution,
    },
    domain::{
        ArchiveFormat, CollisionChoice, Decision, append_timestamp, ensure_inside_destination,
        rename_with_format,
    },
    error::ZipbuildResult,
};

/// Interactive filename collision resolver.
pub struct CollisionResolver<'a> {
    filesystem: &'a dyn Filesystem,
    prompter: &'a dyn Prompter,
    clock: &'a dyn Clock,
}

impl<'a> CollisionResolver<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        prompter: &'a dyn Prompter,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            filesystem,
            prompter,
            clock,
        }
    }

    /// Resolve `filename` against the contents of `directory`.
    ///
    /// Every candidate, typed or generated, must stay inside `directory`.
    #[instrument(skip_all, fields(directory = %directory.display()))]
    pub fn resolve(
        &self,
        directory: &Path,
        filename: impl Into<String>,
        format: ArchiveFormat,
    ) -> ZipbuildResult<Resolution> {
        let mut candidate = filename.into();
        loop {
            match self.step(directory, candidate, format)? {
                Decision::Use(name) => return Ok(Resolution::Resolved(name)),
                Decision::Retry(name) => {
                    debug!(candidate = %name, "Checking renamed candidate");
                    candidate = name;
                }
                Decision::Abort => return Ok(Resolution::Aborted),
            }
        }
    }

    /// One round: check, and if taken, ask.
    fn step(
        &self,
        directory: &Path,
        filename: String,
        format: ArchiveFormat,
    ) -> ZipbuildResult<Decision> {
        ensure_inside_destination(&filename)?;
        if !self.filesystem.exists(&directory.join(&filename)) {
            return Ok(Decision::Use(filename));
        }

        let question = format!(
            "The file '{filename}' already exists in directory '{}'.. What do you want to do?",
            directory.display()
        );
        let selected = self
            .prompter
            .select(&question, &CollisionChoice::labels())?;

        let decision = match CollisionChoice::from_index(selected) {
            CollisionChoice::Overwrite => {
                info!(file = %filename, "Overwriting existing archive");
                Decision::Use(filename)
            }
            CollisionChoice::AppendTimestamp => {
                Decision::Retry(append_timestamp(&filename, self.clock.now_millis()))
            }
            CollisionChoice::Rename => {
                let base = self.prompter.input("New name for your file:")?;
                if base.is_empty() {
                    // Nothing typed: ask about the same file again.
                    Decision::Retry(filename)
                } else {
                    Decision::Retry(rename_with_format(&base, format))
                }
            }
            CollisionChoice::Exit => Decision::Abort,
        };

        Ok(decision)
    }
}
