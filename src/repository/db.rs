//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations. A single connection is
//! shared by every repository behind a tokio Mutex; mutations serialize
//! there. The guard is never held across an await.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Connection handle shared by all repositories
pub type SharedConn = Arc<Mutex<Option<Connection>>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: SharedConn,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for DbState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::QueryReturnedNoRows => {
                DomainError::NotFound("row not found".to_string())
            }
            other => DomainError::Internal(other.to_string()),
        }
    }
}

/// Open the database at `db_path` (":memory:" supported) and run migrations
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| DomainError::InvalidInput("Invalid DB path".to_string()))?;

    let conn = Connection::open(db_path_str)
        .map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))?;

    run_migrations(&conn)?;
    log::info!("database ready at {}", db_path_str);

    let state = DbState::new();
    *state.conn.lock().await = Some(conn);

    Ok(state)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            image_url TEXT NOT NULL DEFAULT '',
            tags TEXT NOT NULL DEFAULT '[]',
            category TEXT NOT NULL DEFAULT 'Other',
            live_url TEXT,
            github_url TEXT,
            featured INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER
        );

        CREATE TABLE IF NOT EXISTS photos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            image_url TEXT NOT NULL,
            title TEXT,
            caption TEXT,
            created_at INTEGER
        );

        CREATE TABLE IF NOT EXISTS education (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            institution TEXT NOT NULL,
            degree TEXT NOT NULL,
            field TEXT,
            year TEXT NOT NULL DEFAULT '',
            description TEXT,
            order_index INTEGER
        );

        CREATE TABLE IF NOT EXISTS experience (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            company TEXT NOT NULL,
            role TEXT NOT NULL,
            period TEXT NOT NULL DEFAULT '',
            description TEXT,
            order_index INTEGER
        );

        CREATE TABLE IF NOT EXISTS tech_stack (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category TEXT,
            order_index INTEGER
        );

        CREATE TABLE IF NOT EXISTS social_links (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            platform TEXT NOT NULL,
            url TEXT NOT NULL,
            label TEXT,
            order_index INTEGER
        );

        CREATE TABLE IF NOT EXISTS contact_info (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            email TEXT NOT NULL,
            phone TEXT,
            location TEXT
        );",
    )?;

    Ok(())
}
