//! Archiver adapters.

mod local;
mod recording;

pub use local::LocalArchiver;
pub use recording::{ArchiveCall, RecordingArchiver};
