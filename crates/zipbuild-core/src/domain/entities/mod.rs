pub mod collision;
pub mod filename_template;
pub mod metadata;

pub use crate::domain::DomainError;
pub use collision::{CollisionChoice, Decision};
pub use filename_template::FilenameTemplate;
pub use metadata::ProjectMetadata;
