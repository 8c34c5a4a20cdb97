//! Application ports (traits) for external dependencies.
//!
//! Ports define interfaces that the application needs from the outside
//! world. Adapters in `zipbuild-adapters` (and the terminal prompter in
//! `zipbuild-cli`) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: existence checks, directory creation, ignore-file appends
//!   - `Prompter`: confirmations, free-text input, single-choice lists
//!   - `Archiver`: zip / tar creation
//!   - `ManifestReader`: project name and version
//!   - `Clock`: timestamps for collision renames

pub mod output;

pub use output::{Archiver, Clock, Filesystem, ManifestReader, Prompter};

#[cfg(test)]
pub use output::{MockArchiver, MockClock, MockFilesystem, MockManifestReader, MockPrompter};
