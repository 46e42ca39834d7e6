//! Social Link Repository
//!
//! SQLite-backed CRUD for footer links. Unordered rows fall back to
//! alphabetical by platform.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::SharedConn;
use super::positioning;
use super::traits::{ReorderableRepository, Repository};
use crate::domain::{DomainError, DomainResult, SocialLink};

/// SQLite implementation of the social link repository
pub struct SocialLinkRepository {
    pub(super) conn: SharedConn,
}

impl SocialLinkRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<SocialLink> for SocialLinkRepository {
    async fn create(&self, entity: &SocialLink) -> DomainResult<SocialLink> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let order_index = match entity.order_index {
            Some(idx) => idx,
            None => positioning::next_order_index(conn, "social_links")?,
        };

        conn.execute(
            "INSERT INTO social_links (platform, url, label, order_index) VALUES (?, ?, ?, ?)",
            params![entity.platform, entity.url, entity.label, order_index],
        )?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid() as u32;
        created.order_index = Some(order_index);
        log::debug!("created social link {} at order {}", created.id, order_index);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<SocialLink>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let entry = conn
            .query_row(
                "SELECT id, platform, url, label, order_index FROM social_links WHERE id = ?",
                params![id],
                row_to_link,
            )
            .optional()?;
        Ok(entry)
    }

    async fn list(&self) -> DomainResult<Vec<SocialLink>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn.prepare(
            "SELECT id, platform, url, label, order_index FROM social_links
             ORDER BY order_index IS NULL, order_index, platform, id",
        )?;
        let rows = stmt.query_map([], row_to_link)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn update(&self, entity: &SocialLink) -> DomainResult<SocialLink> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "UPDATE social_links SET platform = ?, url = ?, label = ?, order_index = ? WHERE id = ?",
            params![entity.platform, entity.url, entity.label, entity.order_index, entity.id],
        )?;

        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM social_links WHERE id = ?", params![id])?;
        log::debug!("deleted social link {}", id);
        Ok(())
    }
}

#[async_trait]
impl ReorderableRepository<SocialLink> for SocialLinkRepository {
    async fn reorder(&self, ids: &[u32]) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        positioning::write_order(conn, "social_links", ids)
    }
}

/// Convert a database row to SocialLink
fn row_to_link(row: &Row<'_>) -> rusqlite::Result<SocialLink> {
    Ok(SocialLink {
        id: row.get(0)?,
        platform: row.get(1)?,
        url: row.get(2)?,
        label: row.get(3)?,
        order_index: row.get(4)?,
    })
}
