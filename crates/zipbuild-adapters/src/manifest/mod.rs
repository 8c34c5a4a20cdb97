//! Project manifest adapters.

mod loader;

pub use loader::{MANIFEST_FILES, ManifestLoader};
