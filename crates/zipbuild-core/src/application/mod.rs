//! Application layer for zipbuild.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PackageService, SetupService, CollisionResolver)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Request**: The run configuration and outcome types threaded through services
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Filename rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod request;
pub mod services;

// Re-export main services
pub use services::{CollisionResolver, PackageService, SetupService};

// Re-export port traits (for adapter implementation)
pub use ports::{Archiver, Clock, Filesystem, ManifestReader, Prompter};

pub use request::{
    AbortReason, DEFAULT_IGNORE_FILE, PackageOptions, PackageOutcome, PackageReport,
    PackageRequest, Resolution, SetupOutcome,
};

pub use error::ApplicationError;
