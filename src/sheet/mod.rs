//! Sheet-like row store: 1-based rows, header in row 1, positional
//! update/delete with the rows below shifting up.

pub mod memory;

use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use memory::MemorySheet;

/// Exact header row expected in row 1, in column order.
pub const HEADERS: [&str; 10] = [
    "Timestamp",
    "User",
    "Odometer Start",
    "Odometer End",
    "Distance (km)",
    "Liters",
    "Amount Paid (₹)",
    "Fuel Efficiency (km/l)",
    "Cost per KM (₹)",
    "Fuel Price (₹/l)",
];

/// Number of rows occupied by the header.
pub const HEADER_ROWS: usize = 1;

/// A single sheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn text<S: Into<String>>(s: S) -> Self {
        Cell::Text(s.into())
    }

    /// Numeric view of the cell. Blank text reads as 0, like an empty sheet cell.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) if s.trim().is_empty() => Some(0.0),
            Cell::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One data row keyed by header name.
pub type Record = BTreeMap<String, Cell>;

/// Returns the canonical header as cells.
pub fn header_cells() -> Vec<Cell> {
    HEADERS.iter().map(|h| Cell::text(*h)).collect()
}

/// True when `row` is exactly the canonical header.
pub fn is_canonical_header(row: &[Cell]) -> bool {
    row.len() == HEADERS.len()
        && row
            .iter()
            .zip(HEADERS.iter())
            .all(|(c, h)| matches!(c, Cell::Text(s) if s == h))
}

/// Storage boundary for the fuel log.
///
/// Row numbers are absolute and 1-based: the header is row 1 and the first
/// data row is row 2. Every mutation bumps `generation`.
pub trait RowStore {
    /// Every stored row, header included, in storage order.
    fn get_all_values(&self) -> AppResult<Vec<Vec<Cell>>>;

    /// Append a row at the bottom, returning the row number it landed on.
    fn append(&mut self, row: &[Cell]) -> AppResult<usize>;

    /// Overwrite the full row at `row_number` in a single write.
    fn update_range(&mut self, row_number: usize, row: &[Cell]) -> AppResult<()>;

    /// Remove the row at `row_number`; the rows below shift up by one.
    fn delete_row(&mut self, row_number: usize) -> AppResult<()>;

    /// Remove every row, header included.
    fn clear(&mut self) -> AppResult<()>;

    /// Mutation counter.
    fn generation(&self) -> AppResult<u64>;

    fn header(&self) -> AppResult<Option<Vec<Cell>>> {
        Ok(self.get_all_values()?.into_iter().next())
    }

    /// Data rows (row 2 onwards) keyed by the header names of row 1.
    fn load_all(&self) -> AppResult<Vec<Record>> {
        let mut rows = self.get_all_values()?.into_iter();
        let header: Vec<String> = match rows.next() {
            Some(h) => h.iter().map(Cell::as_text).collect(),
            None => return Ok(Vec::new()),
        };

        Ok(rows
            .map(|row| {
                header
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let cell = row.get(i).cloned().unwrap_or_else(|| Cell::text(""));
                        (name.clone(), cell)
                    })
                    .collect()
            })
            .collect())
    }
}
