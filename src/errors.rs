//! Unified application error type.
//! All modules (db, sheet, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Row store / database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Row store error: {0}")]
    Store(String),

    #[error("Invalid row number: {0} (data rows start at 2)")]
    InvalidRow(usize),

    #[error(
        "Row {row} was addressed with generation {expected}, but the sheet is at generation {actual}. Reload and retry."
    )]
    StaleRow {
        row: usize,
        expected: u64,
        actual: u64,
    },

    // ---------------------------
    // Input / form errors
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No session for user '{0}'. Start one with: rfuellogger session --start <km>")]
    NoSession(String),

    #[error(
        "Odometer chain broken: row {row} would end at {odometer_end:.1} but row {next_row} starts at {next_start:.1}"
    )]
    ChainMismatch {
        row: usize,
        odometer_end: f64,
        next_row: usize,
        next_start: f64,
    },

    #[error(
        "Entry saved at row {row} but the session cursor for '{user}' was not updated ({reason}). Run: rfuellogger session --start {odometer_end:.1} --user {user}"
    )]
    CursorNotSaved {
        row: usize,
        user: String,
        odometer_end: f64,
        reason: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
