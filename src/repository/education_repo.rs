//! Education Repository
//!
//! SQLite-backed CRUD for the education timeline. Display order follows
//! `order_index`; rows without one sort newest-first by `year` after the
//! ordered rows.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::SharedConn;
use super::positioning;
use super::traits::{ReorderableRepository, Repository};
use crate::domain::{DomainError, DomainResult, Education};

/// SQLite implementation of the education repository
pub struct EducationRepository {
    pub(super) conn: SharedConn,
}

impl EducationRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Education> for EducationRepository {
    async fn create(&self, entity: &Education) -> DomainResult<Education> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        // New entries append at the end of the current order
        let order_index = match entity.order_index {
            Some(idx) => idx,
            None => positioning::next_order_index(conn, "education")?,
        };

        conn.execute(
            "INSERT INTO education (institution, degree, field, year, description, order_index)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                entity.institution,
                entity.degree,
                entity.field,
                entity.year,
                entity.description,
                order_index,
            ],
        )?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid() as u32;
        created.order_index = Some(order_index);
        log::debug!("created education entry {} at order {}", created.id, order_index);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Education>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let entry = conn
            .query_row(
                "SELECT id, institution, degree, field, year, description, order_index
                 FROM education WHERE id = ?",
                params![id],
                row_to_education,
            )
            .optional()?;
        Ok(entry)
    }

    async fn list(&self) -> DomainResult<Vec<Education>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn.prepare(
            "SELECT id, institution, degree, field, year, description, order_index
             FROM education
             ORDER BY order_index IS NULL, order_index, year DESC, id",
        )?;
        let rows = stmt.query_map([], row_to_education)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn update(&self, entity: &Education) -> DomainResult<Education> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "UPDATE education SET institution = ?, degree = ?, field = ?, year = ?, description = ?, order_index = ?
             WHERE id = ?",
            params![
                entity.institution,
                entity.degree,
                entity.field,
                entity.year,
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

        // Remaining order_index values keep their gap; display sorts, never indexes
        conn.execute("DELETE FROM education WHERE id = ?", params![id])?;
        log::debug!("deleted education entry {}", id);
        Ok(())
    }
}

#[async_trait]
impl ReorderableRepository<Education> for EducationRepository {
    async fn reorder(&self, ids: &[u32]) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        positioning::write_order(conn, "education", ids)
    }
}

/// Convert a database row to Education
fn row_to_education(row: &Row<'_>) -> rusqlite::Result<Education> {
    Ok(Education {
        id: row.get(0)?,
        institution: row.get(1)?,
        degree: row.get(2)?,
        field: row.get(3)?,
        year: row.get(4)?,
        description: row.get(5)?,
        order_index: row.get(6)?,
    })
}
