//! Shared Positioning Helpers
//!
//! Order management used by every reorderable repository. Appending takes
//! the next index after the current maximum; a reorder rewrites the index
//! of every listed row to its position in the submitted id list. Deletes
//! leave gaps on purpose: display sorts by `order_index`, nothing indexes
//! by it.

use rusqlite::{params, Connection};

use crate::domain::DomainResult;

/// Next append position for a collection (0 for an empty or unordered one)
pub(super) fn next_order_index(conn: &Connection, table: &str) -> DomainResult<u32> {
    let query = format!("SELECT COALESCE(MAX(order_index), -1) + 1 FROM {}", table);
    let next: i64 = conn.query_row(&query, [], |row| row.get(0))?;
    Ok(next as u32)
}

/// Rewrite `order_index` for every listed row to its slice position.
///
/// Rows not listed keep their previous index. The per-row updates run in
/// one transaction so an interrupted rewrite leaves the old order intact
/// rather than a half-applied one.
pub(super) fn write_order(conn: &Connection, table: &str, ids: &[u32]) -> DomainResult<()> {
    let tx = conn.unchecked_transaction()?;
    let query = format!("UPDATE {} SET order_index = ? WHERE id = ?", table);
    for (new_pos, id) in ids.iter().enumerate() {
        tx.execute(&query, params![new_pos as u32, *id])?;
    }
    tx.commit()?;
    log::debug!("rewrote order of {} rows in {}", ids.len(), table);
    Ok(())
}
