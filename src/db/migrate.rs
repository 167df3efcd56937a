use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `entries` table holding one draft per row.
fn create_entries_table(conn: &Connection) -> Result<()> {
    let version = "20260301_0001_create_entries";
    if migration_applied(conn, version)? && table_exists(conn, "entries")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            unit         TEXT NOT NULL DEFAULT '',
            date         TEXT NOT NULL,
            shift        TEXT NOT NULL DEFAULT 'Matutino'
                         CHECK(shift IN ('Matutino','Vespertino','Mixto')),
            responsible  TEXT NOT NULL DEFAULT '',
            payload      TEXT NOT NULL,
            status       TEXT NOT NULL DEFAULT 'open' CHECK(status IN ('open','closed')),
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        "#,
    )?;

    if !migration_applied(conn, version)? {
        mark_applied(conn, version, "Created entries table")?;
        success("Created entries table.");
    }
    Ok(())
}

/// Index used to pick the active entry.
fn add_status_index(conn: &Connection) -> Result<()> {
    let version = "20260301_0002_entries_status_index";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_entries_status_updated ON entries(status, updated_at);",
    )?;

    mark_applied(conn, version, "Added status/updated_at index to entries")?;
    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Public entry point: run all pending migrations. Safe to call repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_entries_table(conn)?;
    add_status_index(conn)?;
    Ok(())
}

/// Tables the schema needs, with whether each one is present.
pub fn schema_status(conn: &Connection) -> Result<Vec<(&'static str, bool)>> {
    ["log", "entries"]
        .into_iter()
        .map(|t| Ok((t, table_exists(conn, t)?)))
        .collect()
}
