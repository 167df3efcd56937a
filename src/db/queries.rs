use crate::db::models::{EntryRow, EntryStatus, StoredEntry};
use crate::errors::{AppError, AppResult};
use crate::models::{LogbookEntry, Shift};
use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ROW_COLUMNS: &str = "id, unit, date, shift, responsible, status, created_at, updated_at";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<EntryRow> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let shift_str: String = row.get("shift")?;
    let shift = Shift::from_db_str(&shift_str)
        .ok_or_else(|| conversion_error(AppError::InvalidShift(shift_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = EntryStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_error(AppError::Other(format!("Invalid status: {}", status_str)))
    })?;

    Ok(EntryRow {
        id: row.get("id")?,
        unit: row.get("unit")?,
        date,
        shift,
        responsible: row.get("responsible")?,
        status,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// UTC, so the text order of `updated_at` is its time order.
fn now() -> String {
    Utc::now().to_rfc3339()
}

/// Store a new open entry and return its row id.
pub fn insert_entry(conn: &Connection, entry: &LogbookEntry) -> AppResult<i64> {
    let payload = serde_json::to_string(entry)?;
    let ts = now();

    conn.execute(
        "INSERT INTO entries (unit, date, shift, responsible, payload, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, 'open', ?6, ?6)",
        params![
            entry.unit,
            entry.date.format("%Y-%m-%d").to_string(),
            entry.shift.to_db_str(),
            entry.responsible,
            payload,
            ts,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Overwrite the stored payload of `id` and refresh its summary columns.
pub fn save_entry(conn: &Connection, id: i64, entry: &LogbookEntry) -> AppResult<()> {
    let payload = serde_json::to_string(entry)?;

    let changed = conn.execute(
        "UPDATE entries
         SET unit = ?1, date = ?2, shift = ?3, responsible = ?4, payload = ?5, updated_at = ?6
         WHERE id = ?7",
        params![
            entry.unit,
            entry.date.format("%Y-%m-%d").to_string(),
            entry.shift.to_db_str(),
            entry.responsible,
            payload,
            now(),
            id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<StoredEntry> {
    let found = conn
        .query_row(
            &format!("SELECT {ROW_COLUMNS}, payload FROM entries WHERE id = ?1"),
            [id],
            |row| Ok((map_row(row)?, row.get::<_, String>("payload")?)),
        )
        .optional()?;

    let (row, payload) = found.ok_or(AppError::EntryNotFound(id))?;
    let entry: LogbookEntry = serde_json::from_str(&payload)?;
    Ok(StoredEntry { row, entry })
}

pub fn set_status(conn: &Connection, id: i64, status: EntryStatus) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE entries SET status = ?1, updated_at = ?2 WHERE id = ?3",
        params![status.to_db_str(), now(), id],
    )?;

    if changed == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

/// All entries, newest date first.
pub fn list_entries(conn: &Connection) -> AppResult<Vec<EntryRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ROW_COLUMNS} FROM entries ORDER BY date DESC, id DESC"
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<bool> {
    let deleted = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    Ok(deleted > 0)
}

/// The entry commands act on: `explicit` when given, otherwise the most
/// recently updated open entry.
pub fn resolve_active_entry(conn: &Connection, explicit: Option<i64>) -> AppResult<i64> {
    if let Some(id) = explicit {
        let exists = conn
            .query_row("SELECT 1 FROM entries WHERE id = ?1", [id], |_| Ok(()))
            .optional()?;
        return exists.map(|_| id).ok_or(AppError::EntryNotFound(id));
    }

    conn.query_row(
        "SELECT id FROM entries WHERE status = 'open'
         ORDER BY updated_at DESC, id DESC LIMIT 1",
        [],
        |row| row.get(0),
    )
    .optional()?
    .ok_or(AppError::NoActiveEntry)
}
