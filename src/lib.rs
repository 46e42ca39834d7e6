//! Folio Backend
//!
//! Content engine for a personal portfolio site with an admin panel.
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Admin panel handlers (CRUD + reorder per collection)
//! - reorder: Shared move-up/move-down engine for the ordered collections
//! - view: Client-side filter/facet/pagination state for the projects page
//!
//! Authentication, file upload and page rendering stay outside this crate;
//! the command layer assumes the admin gate already passed.

use std::path::Path;

pub mod commands;
pub mod domain;
pub mod reorder;
pub mod repository;
pub mod view;

use repository::{
    init_db, ContactRepository, DbState, EducationRepository, ExperienceRepository,
    PhotoRepository, ProjectRepository, SocialLinkRepository, TechStackRepository,
};

/// Application state shared across commands
///
/// One repository per collection, all over the same connection.
pub struct AppState {
    pub db_state: DbState,
    pub projects: ProjectRepository,
    pub photos: PhotoRepository,
    pub education: EducationRepository,
    pub experience: ExperienceRepository,
    pub tech_stack: TechStackRepository,
    pub social_links: SocialLinkRepository,
    pub contact: ContactRepository,
}

impl AppState {
    /// Open (or create) the database at `db_path` and wire up every
    /// repository. `:memory:` gives a throwaway state for tests.
    pub async fn init(db_path: &Path) -> Result<Self, String> {
        let db_state = init_db(db_path).await.map_err(|e| e.to_string())?;
        Ok(Self::with_db(db_state))
    }

    pub fn with_db(db_state: DbState) -> Self {
        let conn = db_state.conn.clone();
        Self {
            projects: ProjectRepository::new(conn.clone()),
            photos: PhotoRepository::new(conn.clone()),
            education: EducationRepository::new(conn.clone()),
            experience: ExperienceRepository::new(conn.clone()),
            tech_stack: TechStackRepository::new(conn.clone()),
            social_links: SocialLinkRepository::new(conn.clone()),
            contact: ContactRepository::new(conn),
            db_state,
        }
    }
}
