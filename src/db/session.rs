use crate::errors::AppResult;
use crate::models::cursor::SessionCursor;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Load the stored cursor of `user`, if a session was started.
pub fn load_cursor(conn: &Connection, user: &str) -> AppResult<Option<SessionCursor>> {
    let last: Option<f64> = conn
        .query_row(
            "SELECT last_odometer FROM session WHERE user = ?1",
            [user],
            |r| r.get(0),
        )
        .optional()?;
    Ok(last.map(SessionCursor::start))
}

/// Persist `cursor` for `user`.
pub fn save_cursor(conn: &Connection, user: &str, cursor: SessionCursor) -> AppResult<()> {
    conn.execute(
        "INSERT INTO session (user, last_odometer, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(user) DO UPDATE SET
             last_odometer = excluded.last_odometer,
             updated_at    = excluded.updated_at",
        params![user, cursor.last_odometer, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// All stored sessions as (user, last odometer, updated at).
pub fn list_sessions(conn: &Connection) -> AppResult<Vec<(String, f64, String)>> {
    let mut stmt =
        conn.prepare("SELECT user, last_odometer, updated_at FROM session ORDER BY user ASC")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, f64>(1)?,
            r.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
