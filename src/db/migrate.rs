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

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Sheet rows in storage order, plus the generation counter.
fn create_sheet_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sheet_rows (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            cells  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sheet_meta (
            key    TEXT PRIMARY KEY,
            value  INTEGER NOT NULL
        );

        INSERT OR IGNORE INTO sheet_meta (key, value) VALUES ('generation', 0);
        "#,
    )?;
    Ok(())
}

/// Per-user session cursor.
fn create_session_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS session (
            user           TEXT PRIMARY KEY,
            last_odometer  REAL NOT NULL,
            updated_at     TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations. Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Sheet storage
    let fresh = !table_exists(conn, "sheet_rows")?;
    create_sheet_tables(conn)?;

    // 3) Session cursor storage
    create_session_table(conn)?;

    if fresh {
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', 'sheet_v1', 'Created sheet tables')",
            [],
        )?;
        success("Created sheet tables.");
    }

    Ok(())
}
