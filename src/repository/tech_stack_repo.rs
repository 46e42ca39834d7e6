//! Tech Stack Repository
//!
//! SQLite-backed CRUD for tech badges. Unordered rows fall back to
//! alphabetical by name.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::SharedConn;
use super::positioning;
use super::traits::{ReorderableRepository, Repository};
use crate::domain::{DomainError, DomainResult, TechStack};

/// SQLite implementation of the tech stack repository
pub struct TechStackRepository {
    pub(super) conn: SharedConn,
}

impl TechStackRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<TechStack> for TechStackRepository {
    async fn create(&self, entity: &TechStack) -> DomainResult<TechStack> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let order_index = match entity.order_index {
            Some(idx) => idx,
            None => positioning::next_order_index(conn, "tech_stack")?,
        };

        conn.execute(
            "INSERT INTO tech_stack (name, category, order_index) VALUES (?, ?, ?)",
            params![entity.name, entity.category, order_index],
        )?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid() as u32;
        created.order_index = Some(order_index);
        log::debug!("created tech stack entry {} at order {}", created.id, order_index);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<TechStack>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let entry = conn
            .query_row(
                "SELECT id, name, category, order_index FROM tech_stack WHERE id = ?",
                params![id],
                row_to_tech,
            )
            .optional()?;
        Ok(entry)
    }

    async fn list(&self) -> DomainResult<Vec<TechStack>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn.prepare(
            "SELECT id, name, category, order_index FROM tech_stack
             ORDER BY order_index IS NULL, order_index, name, id",
        )?;
        let rows = stmt.query_map([], row_to_tech)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn update(&self, entity: &TechStack) -> DomainResult<TechStack> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "UPDATE tech_stack SET name = ?, category = ?, order_index = ? WHERE id = ?",
            params![entity.name, entity.category, entity.order_index, entity.id],
        )?;

        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM tech_stack WHERE id = ?", params![id])?;
        log::debug!("deleted tech stack entry {}", id);
        Ok(())
    }
}

#[async_trait]
impl ReorderableRepository<TechStack> for TechStackRepository {
    async fn reorder(&self, ids: &[u32]) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        positioning::write_order(conn, "tech_stack", ids)
    }
}

/// Convert a database row to TechStack
fn row_to_tech(row: &Row<'_>) -> rusqlite::Result<TechStack> {
    Ok(TechStack {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        order_index: row.get(3)?,
    })
}
