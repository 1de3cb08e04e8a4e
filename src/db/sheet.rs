//! SQLite-backed sheet. Rows are kept in `id` order; a row's number is its
//! 1-based rank in that order, so deleting a row shifts the ones below it.

use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::sheet::{Cell, RowStore};
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteSheet {
    pool: DbPool,
}

impl SqliteSheet {
    /// Open the sheet stored at `path`, creating the tables if needed.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn row_count(&self) -> AppResult<usize> {
        let n: i64 = self
            .pool
            .conn
            .query_row("SELECT COUNT(*) FROM sheet_rows", [], |r| r.get(0))?;
        Ok(n as usize)
    }

    fn id_at(conn: &Connection, row_number: usize) -> AppResult<i64> {
        if row_number == 0 {
            return Err(AppError::InvalidRow(0));
        }
        conn.query_row(
            "SELECT id FROM sheet_rows ORDER BY id ASC LIMIT 1 OFFSET ?1",
            [(row_number - 1) as i64],
            |r| r.get(0),
        )
        .optional()?
        .ok_or(AppError::InvalidRow(row_number))
    }

    fn bump_generation(conn: &Connection) -> AppResult<()> {
        conn.execute(
            "UPDATE sheet_meta SET value = value + 1 WHERE key = 'generation'",
            [],
        )?;
        Ok(())
    }
}

fn encode(row: &[Cell]) -> AppResult<String> {
    serde_json::to_string(row).map_err(|e| AppError::Store(format!("cannot encode row: {e}")))
}

fn decode(raw: &str) -> AppResult<Vec<Cell>> {
    serde_json::from_str(raw).map_err(|e| AppError::Store(format!("corrupt row: {e}")))
}

impl RowStore for SqliteSheet {
    fn get_all_values(&self) -> AppResult<Vec<Vec<Cell>>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT cells FROM sheet_rows ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(decode(&r?)?);
        }
        Ok(out)
    }

    fn append(&mut self, row: &[Cell]) -> AppResult<usize> {
        let raw = encode(row)?;
        let tx = self.pool.conn.transaction()?;
        tx.execute("INSERT INTO sheet_rows (cells) VALUES (?1)", [raw])?;
        Self::bump_generation(&tx)?;
        let n: i64 = tx.query_row("SELECT COUNT(*) FROM sheet_rows", [], |r| r.get(0))?;
        tx.commit()?;
        Ok(n as usize)
    }

    fn update_range(&mut self, row_number: usize, row: &[Cell]) -> AppResult<()> {
        let raw = encode(row)?;
        let tx = self.pool.conn.transaction()?;
        let id = Self::id_at(&tx, row_number)?;
        tx.execute(
            "UPDATE sheet_rows SET cells = ?1 WHERE id = ?2",
            params![raw, id],
        )?;
        Self::bump_generation(&tx)?;
        tx.commit()?;
        Ok(())
    }

    fn delete_row(&mut self, row_number: usize) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        let id = Self::id_at(&tx, row_number)?;
        tx.execute("DELETE FROM sheet_rows WHERE id = ?1", [id])?;
        Self::bump_generation(&tx)?;
        tx.commit()?;
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        tx.execute("DELETE FROM sheet_rows", [])?;
        Self::bump_generation(&tx)?;
        tx.commit()?;
        Ok(())
    }

    fn generation(&self) -> AppResult<u64> {
        let g: i64 = self.pool.conn.query_row(
            "SELECT value FROM sheet_meta WHERE key = 'generation'",
            [],
            |r| r.get(0),
        )?;
        Ok(g as u64)
    }
}
