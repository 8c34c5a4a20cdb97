//! The packaging run, the only thing `zipbuild` does.
//!
//! Responsibility: merge CLI arguments with configuration, wire the
//! production adapters into the core service, and display the outcome. No
//! business logic lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use zipbuild_adapters::{LocalArchiver, LocalFilesystem, ManifestLoader, SystemClock};
use zipbuild_core::{
    application::{PackageOutcome, PackageRequest, PackageService, ports::Archiver},
    domain::ArchiveFormat,
    error::ZipbuildResult,
};

use crate::{
    cli::PackArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::TerminalPrompter,
};

/// Execute a packaging run in `working_dir`.
#[instrument(skip_all, fields(working_dir = %working_dir.display()))]
pub fn execute(
    args: PackArgs,
    working_dir: PathBuf,
    config: &AppConfig,
    output: Arc<OutputManager>,
) -> CliResult<()> {
    let (build_dir, zip_dir, options) = config.options(&args)?;
    debug!(
        build_dir = %build_dir.display(),
        zip_dir = %zip_dir.display(),
        format = %options.format,
        template = %options.template,
        ask_filename = options.ask_filename,
        "Run configured"
    );

    let request = PackageRequest::new(working_dir, build_dir, zip_dir, options);
    let service = PackageService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(TerminalPrompter::new(
            output.supports_color(),
            output.is_quiet(),
        )),
        Box::new(ProgressArchiver {
            inner: LocalArchiver::new(),
            output: Arc::clone(&output),
        }),
        Box::new(ManifestLoader::new(LocalFilesystem::new())),
        Box::new(SystemClock),
    );

    match service.package(&request)? {
        PackageOutcome::Completed(report) => {
            output.report(&report)?;
            Ok(())
        }
        PackageOutcome::Aborted(reason) => Err(CliError::Cancelled { reason }),
    }
}

/// Shows a spinner while the wrapped archiver works.
struct ProgressArchiver<A> {
    inner: A,
    output: Arc<OutputManager>,
}

impl<A: Archiver> Archiver for ProgressArchiver<A> {
    fn archive(
        &self,
        source: &Path,
        destination: &Path,
        format: ArchiveFormat,
    ) -> ZipbuildResult<String> {
        let spinner = self.output.spinner(format!(
            "Archiving {} into {}",
            source.display(),
            destination.display()
        ));
        let result = self.inner.archive(source, destination, format);
        spinner.finish_and_clear();
        result
    }
}
