//! Admin Commands for Projects
//!
//! CRUD handlers for the projects admin screen. Category input is
//! normalized through the closed `ProjectCategory` set; anything
//! unrecognized lands in `Other`.

use crate::domain::{Project, ProjectCategory};
use crate::repository::Repository;
use crate::AppState;

/// Create a new project
#[allow(clippy::too_many_arguments)]
pub async fn create_project(
    state: &AppState,
    title: String,
    description: String,
    image_url: Option<String>,
    tags: Option<Vec<String>>,
    category: Option<String>,
    live_url: Option<String>,
    github_url: Option<String>,
    featured: Option<bool>,
) -> Result<Project, String> {
    let category = category
        .map(|c| ProjectCategory::from_str(&c))
        .unwrap_or_default();

    let mut project = Project::new(0, title, description, category);
    project.image_url = image_url.unwrap_or_default();
    project.tags = tags.unwrap_or_default();
    project.live_url = live_url;
    project.github_url = github_url;
    project.featured = featured.unwrap_or(false);

    state.projects.create(&project).await.map_err(|e| e.to_string())
}

/// List all projects in insertion order
pub async fn list_projects(state: &AppState) -> Result<Vec<Project>, String> {
    state.projects.list().await.map_err(|e| e.to_string())
}

/// List projects highlighted on the home page
pub async fn list_featured_projects(state: &AppState) -> Result<Vec<Project>, String> {
    state.projects.list_featured().await.map_err(|e| e.to_string())
}

/// Get project by ID
pub async fn get_project(state: &AppState, id: u32) -> Result<Option<Project>, String> {
    state.projects.find_by_id(id).await.map_err(|e| e.to_string())
}

/// Update project fields; unspecified fields keep their value
#[allow(clippy::too_many_arguments)]
pub async fn update_project(
    state: &AppState,
    id: u32,
    title: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    tags: Option<Vec<String>>,
    category: Option<String>,
    live_url: Option<String>,
    github_url: Option<String>,
    featured: Option<bool>,
) -> Result<Project, String> {
    let existing = state
        .projects
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Project {} not found", id))?;

    let updated = Project {
        id: existing.id,
        title: title.unwrap_or(existing.title),
        description: description.unwrap_or(existing.description),
        image_url: image_url.unwrap_or(existing.image_url),
        tags: tags.unwrap_or(existing.tags),
        category: category
            .map(|c| ProjectCategory::from_str(&c).as_str().to_string())
            .unwrap_or(existing.category),
        live_url: live_url.or(existing.live_url),
        github_url: github_url.or(existing.github_url),
        featured: featured.unwrap_or(existing.featured),
        created_at: existing.created_at,
    };

    state.projects.update(&updated).await.map_err(|e| e.to_string())
}

/// Delete project
pub async fn delete_project(state: &AppState, id: u32) -> Result<(), String> {
    state.projects.delete(id).await.map_err(|e| e.to_string())
}
