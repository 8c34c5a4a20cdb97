//! Setup Service - make sure the destination directory exists.
//!
//! Creating the directory and registering it in the ignore file both need
//! the user's consent. Nothing is rolled back if a later step fails.

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Prompter},
        request::{PackageRequest, SetupOutcome},
    },
    error::ZipbuildResult,
};

/// Validates the source directory and prepares the destination.
pub struct SetupService<'a> {
    filesystem: &'a dyn Filesystem,
    prompter: &'a dyn Prompter,
}

impl<'a> SetupService<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, prompter: &'a dyn Prompter) -> Self {
        Self {
            filesystem,
            prompter,
        }
    }

    /// Fail if the build directory is missing; otherwise offer to create the
    /// destination directory and to add it to the ignore file.
    #[instrument(
        skip_all,
        fields(
            build_dir = %request.build_dir.display(),
            zip_dir = %request.zip_dir.display()
        )
    )]
    pub fn ensure_destination(&self, request: &PackageRequest) -> ZipbuildResult<SetupOutcome> {
        let source = request.source_path();
        if !self.filesystem.exists(&source) {
            return Err(ApplicationError::SourceMissing {
                path: request.build_dir.clone(),
            }
            .into());
        }

        let destination = request.destination_path();
        if self.filesystem.exists(&destination) {
            debug!("Destination directory already present");
            return Ok(SetupOutcome::AlreadyPresent);
        }

        let label = request.zip_dir_label();
        let create = self.prompter.confirm(
            &format!("There is no directory with the name '{label}'. Do you want to create it?"),
            true,
        )?;
        if !create {
            info!("Destination directory creation declined");
            return Ok(SetupOutcome::Declined);
        }

        self.filesystem.create_dir(&destination)?;
        self.prompter.notify(&format!("'{label}' created!"))?;
        info!(path = %destination.display(), "Destination directory created");

        let ignore_name = request.options.ignore_file.display();
        let register = self.prompter.confirm(
            &format!("Do you want to include '{label}' in your {ignore_name}?"),
            true,
        )?;
        if register {
            self.filesystem
                .append_to_file(&request.ignore_file_path(), &format!("\n{label}"))?;
            self.prompter.notify("Done!")?;
            info!(ignore_file = %ignore_name, "Destination registered in ignore file");
        }

        Ok(SetupOutcome::Created {
            registered_in_ignore_file: register,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use mockall::predicate::{always, eq};

    use super::*;
    use crate::application::{
        ports::{MockFilesystem, MockPrompter},
        request::PackageOptions,
    };
    use crate::error::ZipbuildError;

    fn request() -> PackageRequest {
        PackageRequest::new("/project", "build", "dist", PackageOptions::default())
    }

    fn filesystem_with(existing: &'static [&'static str]) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |p: &Path| existing.iter().any(|e| p == Path::new(e)));
        fs
    }

    #[test]
    fn missing_source_fails_without_prompting() {
        let fs = filesystem_with(&[]);
        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().never();

        let err = SetupService::new(&fs, &prompter)
            .ensure_destination(&request())
            .unwrap_err();

        assert!(matches!(
            err,
            ZipbuildError::Application(ApplicationError::SourceMissing { ref path })
                if path == &PathBuf::from("build")
        ));
    }

    #[test]
    fn existing_destination_needs_no_prompts_or_writes() {
        let mut fs = filesystem_with(&["/project/build", "/project/dist"]);
        fs.expect_create_dir().never();
        fs.expect_append_to_file().never();
        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().never();
        prompter.expect_notify().never();

        let outcome = SetupService::new(&fs, &prompter)
            .ensure_destination(&request())
            .unwrap();

        assert_eq!(outcome, SetupOutcome::AlreadyPresent);
    }

    #[test]
    fn declining_creation_creates_nothing() {
        let mut fs = filesystem_with(&["/project/build"]);
        fs.expect_create_dir().never();
        fs.expect_append_to_file().never();
        let mut prompter = MockPrompter::new();
        prompter
            .expect_confirm()
            .with(always(), eq(true))
            .times(1)
            .returning(|_, _| Ok(false));

        let outcome = SetupService::new(&fs, &prompter)
            .ensure_destination(&request())
            .unwrap();

        assert_eq!(outcome, SetupOutcome::Declined);
    }

    #[test]
    fn accepting_both_creates_dir_and_appends_ignore_entry() {
        let mut fs = filesystem_with(&["/project/build"]);
        fs.expect_create_dir()
            .withf(|p: &Path| p == Path::new("/project/dist"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_append_to_file()
            .withf(|p: &Path, content: &str| p == Path::new("/project/.gitignore") && content == "\ndist")
            .times(1)
            .returning(|_, _| Ok(()));
        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().times(2).returning(|_, _| Ok(true));
        prompter.expect_notify().times(2).returning(|_| Ok(()));

        let outcome = SetupService::new(&fs, &prompter)
            .ensure_destination(&request())
            .unwrap();

        assert_eq!(
            outcome,
            SetupOutcome::Created {
                registered_in_ignore_file: true
            }
        );
    }

    #[test]
    fn declining_registration_leaves_ignore_file_alone() {
        let mut fs = filesystem_with(&["/project/build"]);
        fs.expect_create_dir().times(1).returning(|_| Ok(()));
        fs.expect_append_to_file().never();
        let mut prompter = MockPrompter::new();
        prompter
            .expect_confirm()
            .withf(|msg: &str, _| msg.contains("create"))
            .returning(|_, _| Ok(true));
        prompter
            .expect_confirm()
            .withf(|msg: &str, _| msg.contains(".gitignore"))
            .returning(|_, _| Ok(false));
        prompter.expect_notify().times(1).returning(|_| Ok(()));

        let outcome = SetupService::new(&fs, &prompter)
            .ensure_destination(&request())
            .unwrap();

        assert_eq!(
            outcome,
            SetupOutcome::Created {
                registered_in_ignore_file: false
            }
        );
    }
}
