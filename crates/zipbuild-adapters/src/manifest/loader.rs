//! Manifest loader for `package.json` and `Cargo.toml`.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use zipbuild_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestReader},
    },
    domain::ProjectMetadata,
    error::ZipbuildResult,
};

/// Manifests probed in order; the first one present wins.
pub const MANIFEST_FILES: [&str; 2] = ["package.json", "Cargo.toml"];

#[derive(Debug, Deserialize)]
struct PackageJson {
    name: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<CargoPackage>,
}

#[derive(Debug, Deserialize)]
struct CargoPackage {
    name: Option<String>,
    version: Option<toml::Value>,
}

/// Reads project name and version through a [`Filesystem`].
#[derive(Debug, Clone)]
pub struct ManifestLoader<F> {
    filesystem: F,
}

impl<F: Filesystem> ManifestLoader<F> {
    pub fn new(filesystem: F) -> Self {
        Self { filesystem }
    }

    fn parse_package_json(path: &Path, content: &str) -> ZipbuildResult<ProjectMetadata> {
        let manifest: PackageJson =
            serde_json::from_str(content).map_err(|e| invalid(path, e.to_string()))?;
        let name = manifest.name.ok_or_else(|| invalid(path, "missing 'name'"))?;
        let version = manifest
            .version
            .ok_or_else(|| invalid(path, "missing 'version'"))?;
        ProjectMetadata::new(name, version).map_err(|e| invalid(path, e.to_string()))
    }

    fn parse_cargo_toml(path: &Path, content: &str) -> ZipbuildResult<ProjectMetadata> {
        let manifest: CargoManifest =
            toml::from_str(content).map_err(|e| invalid(path, e.message().to_string()))?;
        let package = manifest
            .package
            .ok_or_else(|| invalid(path, "missing [package] table"))?;
        let name = package
            .name
            .ok_or_else(|| invalid(path, "missing 'package.name'"))?;
        let version = match package.version {
            Some(toml::Value::String(v)) => v,
            Some(toml::Value::Table(_)) => {
                return Err(invalid(
                    path,
                    "'package.version' is inherited from the workspace",
                ));
            }
            Some(_) => return Err(invalid(path, "'package.version' must be a string")),
            None => return Err(invalid(path, "missing 'package.version'")),
        };
        ProjectMetadata::new(name, version).map_err(|e| invalid(path, e.to_string()))
    }
}

impl<F: Filesystem> ManifestReader for ManifestLoader<F> {
    #[instrument(skip(self), fields(root = %project_root.display()))]
    fn read(&self, project_root: &Path) -> ZipbuildResult<ProjectMetadata> {
        for file in MANIFEST_FILES {
            let path = project_root.join(file);
            if !self.filesystem.exists(&path) {
                continue;
            }

            debug!(manifest = %path.display(), "Reading manifest");
            let content = self.filesystem.read_to_string(&path)?;
            return match file {
                "package.json" => Self::parse_package_json(&path, &content),
                _ => Self::parse_cargo_toml(&path, &content),
            };
        }

        Err(ApplicationError::ManifestNotFound {
            dir: project_root.to_path_buf(),
        }
        .into())
    }
}

fn invalid(path: &Path, reason: impl Into<String>) -> zipbuild_core::error::ZipbuildError {
    ApplicationError::InvalidManifest {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}
