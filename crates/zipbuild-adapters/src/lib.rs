//! Infrastructure adapters for zipbuild.
//!
//! This crate implements the ports defined in `zipbuild_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod archiver;
pub mod clock;
pub mod filesystem;
pub mod manifest;
pub mod prompter;

// Re-export commonly used adapters
pub use archiver::{LocalArchiver, RecordingArchiver};
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest::ManifestLoader;
pub use prompter::{Answer, ScriptedPrompter};
