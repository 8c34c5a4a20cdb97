//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`PackageOptions`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags and positional arguments (merged in [`AppConfig::options`])
//! 2. `ZIPBUILD_*` environment variables, e.g. `ZIPBUILD_DEFAULTS__FORMAT=tar`
//! 3. `--config FILE` when given (required to exist); otherwise
//!    `zipbuild.toml` in the working directory
//! 4. `config.toml` in the user config directory, skipped with `--config`
//! 5. Built-in defaults
//!
//! Without `--config` both files are optional and merged key by key, so
//! `zipbuild.toml` only needs the keys it changes.
//!
//! ```toml
//! [defaults]
//! format    = "tar"
//! template  = "%NAME%-%VERSION%.%EXT%"
//! build_dir = "out"
//! zip_dir   = "releases"
//!
//! [project]
//! ignore_file = ".hgignore"
//!
//! [output]
//! no_color = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use zipbuild_core::{
    application::{DEFAULT_IGNORE_FILE, PackageOptions},
    domain::{ArchiveFormat, DEFAULT_TEMPLATE, FilenameTemplate},
};

use crate::{
    cli::PackArgs,
    error::{CliError, CliResult},
};

/// Name of the per-project config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "zipbuild.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Values used when the command line leaves them out.
    pub defaults: Defaults,
    /// Project conventions.
    pub project: ProjectConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub format: ArchiveFormat,
    pub template: String,
    pub build_dir: PathBuf,
    pub zip_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Ignore file the destination directory gets registered in.
    pub ignore_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                format: ArchiveFormat::Zip,
                template: DEFAULT_TEMPLATE.into(),
                build_dir: PathBuf::from("build"),
                zip_dir: PathBuf::from("dist"),
            },
            project: ProjectConfig {
                ignore_file: PathBuf::from(DEFAULT_IGNORE_FILE),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration for a run in `working_dir`.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.  The
    /// implicit locations are optional.
    pub fn load(config_file: Option<&PathBuf>, working_dir: &Path) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("defaults.format", defaults.defaults.format.as_str())?
            .set_default("defaults.template", defaults.defaults.template.as_str())?
            .set_default("defaults.build_dir", "build")?
            .set_default("defaults.zip_dir", "dist")?
            .set_default("project.ignore_file", DEFAULT_IGNORE_FILE)?
            .set_default("output.no_color", false)?;

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
            }
            None => {
                if let Some(user) = Self::config_path() {
                    builder = builder.add_source(
                        File::from(user.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
                let local = working_dir.join(LOCAL_CONFIG_FILE);
                builder = builder.add_source(
                    File::from(local.as_path())
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let config = builder
            .add_source(
                Environment::with_prefix("ZIPBUILD")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the per-user configuration file, if the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "zipbuild")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Merge command-line arguments over the configured defaults.
    ///
    /// Returns the build directory, the zip directory and the core options.
    pub fn options(&self, args: &PackArgs) -> CliResult<(PathBuf, PathBuf, PackageOptions)> {
        let raw_template = args
            .template
            .as_deref()
            .unwrap_or(&self.defaults.template);
        let template = FilenameTemplate::new(raw_template).map_err(|e| CliError::InvalidInput {
            message: format!("Invalid template '{raw_template}': {e}"),
        })?;

        let options = PackageOptions {
            format: args.format.map(Into::into).unwrap_or(self.defaults.format),
            template,
            ask_filename: args.name,
            ignore_file: self.project.ignore_file.clone(),
        };

        Ok((
            args.build_dir
                .clone()
                .unwrap_or_else(|| self.defaults.build_dir.clone()),
            args.zip_dir
                .clone()
                .unwrap_or_else(|| self.defaults.zip_dir.clone()),
            options,
        ))
    }
}
