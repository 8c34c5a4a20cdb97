//! Core domain layer for zipbuild.
//!
//! Pure logic with no I/O: filename templates, project metadata, archive
//! formats, and the collision vocabulary. Filesystem access, prompting, and
//! archiving are handled via ports defined in the application layer.
//!
//! - **No I/O**: No filesystem, terminal, or clock access
//! - **Immutable values**: All domain objects are Clone + PartialEq
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    collision::{
        CollisionChoice, Decision, append_timestamp, ensure_inside_destination,
        rename_with_format,
    },
    filename_template::{DEFAULT_TEMPLATE, FilenameTemplate, Placeholder},
    metadata::ProjectMetadata,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::ArchiveFormat;
