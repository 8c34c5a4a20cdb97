//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! packaging use case: prepare the destination, pick a filename, archive.

pub mod collision_service;
pub mod package_service;
pub mod setup_service;

pub use collision_service::CollisionResolver;
pub use package_service::PackageService;
pub use setup_service::SetupService;
