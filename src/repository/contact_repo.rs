//! Contact Info Repository
//!
//! Single-row settings-style repository for the contact page details.

use rusqlite::{params, OptionalExtension};

use super::db::SharedConn;
use crate::domain::{ContactInfo, DomainError, DomainResult};

/// SQLite implementation of the contact info repository
pub struct ContactRepository {
    pub(super) conn: SharedConn,
}

impl ContactRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }

    /// Write the single contact row, creating it if missing
    pub async fn save(&self, info: &ContactInfo) -> DomainResult<ContactInfo> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "INSERT OR REPLACE INTO contact_info (id, email, phone, location) VALUES (1, ?, ?, ?)",
            params![info.email, info.phone, info.location],
        )?;

        let mut saved = info.clone();
        saved.id = 1;
        log::debug!("saved contact info");
        Ok(saved)
    }

    /// Read the contact row, if one was ever saved
    pub async fn load(&self) -> DomainResult<Option<ContactInfo>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;

        let info = conn
            .query_row(
                "SELECT id, email, phone, location FROM contact_info WHERE id = 1",
                [],
                |row| {
                    Ok(ContactInfo {
                        id: row.get(0)?,
                        email: row.get(1)?,
                        phone: row.get(2)?,
                        location: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(info)
    }
}
