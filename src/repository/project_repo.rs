//! Project Repository
//!
//! SQLite-backed CRUD for portfolio projects. The `tags` list is stored as
//! a JSON text column. Listing preserves insertion order; the public site
//! filters and paginates client-side (see view::filter).

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::SharedConn;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Project};

/// SQLite implementation of the project repository
pub struct ProjectRepository {
    pub(super) conn: SharedConn,
}

impl ProjectRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }

    /// Projects highlighted on the home page, insertion order
    pub async fn list_featured(&self) -> DomainResult<Vec<Project>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn.prepare(
            "SELECT id, title, description, image_url, tags, category, live_url, github_url, featured, created_at
             FROM projects WHERE featured = 1 ORDER BY id",
        )?;
        let rows = stmt.query_map([], row_to_project)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

#[async_trait]
impl Repository<Project> for ProjectRepository {
    async fn create(&self, entity: &Project) -> DomainResult<Project> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let tags_json = serde_json::to_string(&entity.tags)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        let created_at = entity
            .created_at
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

        conn.execute(
            "INSERT INTO projects (title, description, image_url, tags, category, live_url, github_url, featured, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.title,
                entity.description,
                entity.image_url,
                tags_json,
                entity.category,
                entity.live_url,
                entity.github_url,
                entity.featured as i32,
                created_at,
            ],
        )?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid() as u32;
        created.created_at = Some(created_at);
        log::debug!("created project {}", created.id);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Project>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let project = conn
            .query_row(
                "SELECT id, title, description, image_url, tags, category, live_url, github_url, featured, created_at
                 FROM projects WHERE id = ?",
                params![id],
                row_to_project,
            )
            .optional()?;
        Ok(project)
    }

    async fn list(&self) -> DomainResult<Vec<Project>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn.prepare(
            "SELECT id, title, description, image_url, tags, category, live_url, github_url, featured, created_at
             FROM projects ORDER BY id",
        )?;
        let rows = stmt.query_map([], row_to_project)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn update(&self, entity: &Project) -> DomainResult<Project> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let tags_json = serde_json::to_string(&entity.tags)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        conn.execute(
            "UPDATE projects SET title = ?, description = ?, image_url = ?, tags = ?, category = ?,
             live_url = ?, github_url = ?, featured = ? WHERE id = ?",
            params![
                entity.title,
                entity.description,
                entity.image_url,
                tags_json,
                entity.category,
                entity.live_url,
                entity.github_url,
                entity.featured as i32,
                entity.id,
            ],
        )?;

        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM projects WHERE id = ?", params![id])?;
        log::debug!("deleted project {}", id);
        Ok(())
    }
}

/// Convert a database row to Project
fn row_to_project(row: &Row<'_>) -> rusqlite::Result<Project> {
    let tags_json: String = row.get(4)?;
    Ok(Project {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        image_url: row.get(3)?,
        tags: serde_json::from_str(&tags_json).unwrap_or_default(),
        category: row.get(5)?,
        live_url: row.get(6)?,
        github_url: row.get(7)?,
        featured: row.get::<_, i32>(8)? != 0,
        created_at: row.get(9)?,
    })
}
