//! Experience Repository
//!
//! SQLite-backed CRUD for the work experience timeline. Same ordering
//! contract as education, falling back to newest-first by `period`.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::SharedConn;
use super::positioning;
use super::traits::{ReorderableRepository, Repository};
use crate::domain::{DomainError, DomainResult, Experience};

/// SQLite implementation of the experience repository
pub struct ExperienceRepository {
    pub(super) conn: SharedConn,
}

impl ExperienceRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Experience> for ExperienceRepository {
    async fn create(&self, entity: &Experience) -> DomainResult<Experience> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let order_index = match entity.order_index {
            Some(idx) => idx,
            None => positioning::next_order_index(conn, "experience")?,
        };

        conn.execute(
            "INSERT INTO experience (company, role, period, description, order_index)
             VALUES (?, ?, ?, ?, ?)",
            params![
                entity.company,
                entity.role,
                entity.period,
                entity.description,
                order_index,
            ],
        )?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid() as u32;
        created.order_index = Some(order_index);
        log::debug!("created experience entry {} at order {}", created.id, order_index);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Experience>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let entry = conn
            .query_row(
                "SELECT id, company, role, period, description, order_index
                 FROM experience WHERE id = ?",
                params![id],
                row_to_experience,
            )
            .optional()?;
        Ok(entry)
    }

    async fn list(&self) -> DomainResult<Vec<Experience>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn.prepare(
            "SELECT id, company, role, period, description, order_index
             FROM experience
             ORDER BY order_index IS NULL, order_index, period DESC, id",
        )?;
        let rows = stmt.query_map([], row_to_experience)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn update(&self, entity: &Experience) -> DomainResult<Experience> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "UPDATE experience SET company = ?, role = ?, period = ?, description = ?, order_index = ?
             WHERE id = ?",
            params![
                entity.company,
                entity.role,
                entity.period,
                entity.description,
                entity.order_index,
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

        conn.execute("DELETE FROM experience WHERE id = ?", params![id])?;
        log::debug!("deleted experience entry {}", id);
        Ok(())
    }
}

#[async_trait]
impl ReorderableRepository<Experience> for ExperienceRepository {
    async fn reorder(&self, ids: &[u32]) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        positioning::write_order(conn, "experience", ids)
    }
}

/// Convert a database row to Experience
fn row_to_experience(row: &Row<'_>) -> rusqlite::Result<Experience> {
    Ok(Experience {
        id: row.get(0)?,
        company: row.get(1)?,
        role: row.get(2)?,
        period: row.get(3)?,
        description: row.get(4)?,
        order_index: row.get(5)?,
    })
}
