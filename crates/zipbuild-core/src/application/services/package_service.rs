//! Package Service - main application orchestrator.
//!
//! This service coordinates one packaging run:
//! 1. Prepare the destination directory (setup flow)
//! 2. Render the candidate filename from the template
//! 3. Optionally let the user type a filename
//! 4. Resolve filename collisions
//! 5. Hand the source directory to the archiver
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Archiver, Clock, Filesystem, ManifestReader, Prompter},
        request::{
            AbortReason, PackageOutcome, PackageReport, PackageRequest, Resolution, SetupOutcome,
        },
        services::{CollisionResolver, SetupService},
    },
    error::ZipbuildResult,
};

/// Main packaging service.
pub struct PackageService {
    filesystem: Box<dyn Filesystem>,
    prompter: Box<dyn Prompter>,
    archiver: Box<dyn Archiver>,
    manifest: Box<dyn ManifestReader>,
    clock: Box<dyn Clock>,
}

impl PackageService {
    /// Create a new package service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use zipbuild_core::application::PackageService;
    ///
    /// let service = PackageService::new(
    ///     filesystem, // impl Filesystem
    ///     prompter,   // impl Prompter
    ///     archiver,   // impl Archiver
    ///     manifest,   // impl ManifestReader
    ///     clock,      // impl Clock
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        prompter: Box<dyn Prompter>,
        archiver: Box<dyn Archiver>,
        manifest: Box<dyn ManifestReader>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            filesystem,
            prompter,
            archiver,
            manifest,
            clock,
        }
    }

    /// Package `request.build_dir` into `request.zip_dir`.
    ///
    /// User refusals come back as [`PackageOutcome::Aborted`]; everything
    /// else that stops the run is an error.
    #[instrument(
        skip_all,
        fields(
            build_dir = %request.build_dir.display(),
            zip_dir = %request.zip_dir.display(),
            format = %request.options.format
        )
    )]
    pub fn package(&self, request: &PackageRequest) -> ZipbuildResult<PackageOutcome> {
        let options = &request.options;

        // 1. Destination directory
        let setup = SetupService::new(self.filesystem.as_ref(), self.prompter.as_ref());
        if setup.ensure_destination(request)? == SetupOutcome::Declined {
            return Ok(PackageOutcome::Aborted(AbortReason::SetupDeclined));
        }

        // 2. Candidate filename
        let metadata = self.manifest.read(&request.working_dir)?;
        let mut filename = options.template.render(&metadata, options.format);
        info!(candidate = %filename, "Filename rendered from template");

        // 3. Explicit filename, taken verbatim
        if options.ask_filename {
            let answer = self
                .prompter
                .input("Set output filename (including extension):")?;
            if !answer.is_empty() {
                filename = answer;
            }
        }

        // 4. Collisions
        let destination = request.destination_path();
        let resolver = CollisionResolver::new(
            self.filesystem.as_ref(),
            self.prompter.as_ref(),
            self.clock.as_ref(),
        );
        let filename = match resolver.resolve(&destination, filename, options.format)? {
            Resolution::Resolved(name) => name,
            Resolution::Aborted => return Ok(PackageOutcome::Aborted(AbortReason::UserExit)),
        };

        // 5. Archive
        let archive_path = destination.join(&filename);
        let message =
            self.archiver
                .archive(&request.source_path(), &archive_path, options.format)?;

        let report = PackageReport {
            message,
            relative_path: format!("{}/{}", request.zip_dir_label(), filename),
            filename,
            format: options.format,
            archive_path,
        };
        info!(archive = %report.relative_path, "Package completed");

        Ok(PackageOutcome::Completed(report))
    }
}
