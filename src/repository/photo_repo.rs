//! Photo Repository
//!
//! SQLite-backed CRUD for the photo gallery. Listing is newest first;
//! photos are not reorderable.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::SharedConn;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Photo};

/// SQLite implementation of the photo repository
pub struct PhotoRepository {
    pub(super) conn: SharedConn,
}

impl PhotoRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Photo> for PhotoRepository {
    async fn create(&self, entity: &Photo) -> DomainResult<Photo> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let created_at = entity
            .created_at
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

        conn.execute(
            "INSERT INTO photos (image_url, title, caption, created_at) VALUES (?, ?, ?, ?)",
            params![entity.image_url, entity.title, entity.caption, created_at],
        )?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid() as u32;
        created.created_at = Some(created_at);
        log::debug!("created photo {}", created.id);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Photo>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let photo = conn
            .query_row(
                "SELECT id, image_url, title, caption, created_at FROM photos WHERE id = ?",
                params![id],
                row_to_photo,
            )
            .optional()?;
        Ok(photo)
    }

    async fn list(&self) -> DomainResult<Vec<Photo>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn.prepare(
            "SELECT id, image_url, title, caption, created_at FROM photos
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], row_to_photo)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn update(&self, entity: &Photo) -> DomainResult<Photo> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "UPDATE photos SET image_url = ?, title = ?, caption = ? WHERE id = ?",
            params![entity.image_url, entity.title, entity.caption, entity.id],
        )?;

        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM photos WHERE id = ?", params![id])?;
        log::debug!("deleted photo {}", id);
        Ok(())
    }
}

/// Convert a database row to Photo
fn row_to_photo(row: &Row<'_>) -> rusqlite::Result<Photo> {
    Ok(Photo {
        id: row.get(0)?,
        image_url: row.get(1)?,
        title: row.get(2)?,
        caption: row.get(3)?,
        created_at: row.get(4)?,
    })
}
