//! Repository Layer
//!
//! Data access abstractions and implementations.

mod contact_repo;
mod db;
mod education_repo;
mod experience_repo;
mod photo_repo;
mod positioning;
mod project_repo;
mod social_link_repo;
mod tech_stack_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use contact_repo::ContactRepository;
pub use db::{init_db, DbState, SharedConn};
pub use education_repo::EducationRepository;
pub use experience_repo::ExperienceRepository;
pub use photo_repo::PhotoRepository;
pub use project_repo::ProjectRepository;
pub use social_link_repo::SocialLinkRepository;
pub use tech_stack_repo::TechStackRepository;
pub use traits::{ReorderableRepository, Repository};
