//! Domain Layer
//!
//! Contains all content entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod contact;
mod education;
mod entity;
mod experience;
mod photo;
mod project;
mod social_link;
mod tech_stack;

pub use contact::ContactInfo;
pub use education::Education;
pub use entity::{DomainError, DomainResult, Entity, Orderable};
pub use experience::Experience;
pub use photo::Photo;
pub use project::{Project, ProjectCategory};
pub use social_link::{SocialLink, SocialPlatform};
pub use tech_stack::TechStack;
