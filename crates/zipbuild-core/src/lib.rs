//! zipbuild Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the zipbuild
//! packaging tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          zipbuild-cli (CLI)             │
//! │   (Parses args, owns the terminal)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (PackageService, SetupService,         │
//! │   CollisionResolver)                    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Prompter, Archiver, ...)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    zipbuild-adapters (Infrastructure)   │
//! │ (LocalFilesystem, LocalArchiver, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (FilenameTemplate, ProjectMetadata,     │
//! │  ArchiveFormat, CollisionChoice)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zipbuild_core::prelude::*;
//!
//! let request = PackageRequest::new("/my/project", "build", "dist", PackageOptions::default());
//!
//! // Use application service (with injected adapters)
//! let service = PackageService::new(filesystem, prompter, archiver, manifest, clock);
//! match service.package(&request).unwrap() {
//!     PackageOutcome::Completed(report) => println!("{report}"),
//!     PackageOutcome::Aborted(reason) => println!("Bye! ({reason})"),
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AbortReason, PackageOptions, PackageOutcome, PackageReport, PackageRequest,
        PackageService,
        ports::{Archiver, Clock, Filesystem, ManifestReader, Prompter},
    };
    pub use crate::domain::{ArchiveFormat, FilenameTemplate, ProjectMetadata};
    pub use crate::error::{ZipbuildError, ZipbuildResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
