use crate::errors::{AppError, AppResult};
use crate::sheet::{Cell, HEADERS, Record};
use serde::Serialize;

/// Timestamp format of the `Timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw operator input for one fill-up.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryInput {
    pub user: String,
    pub odometer_start: f64,
    pub odometer_end: f64,
    pub amount_paid: f64,
    pub fuel_price: f64,
}

/// Fields computed from the four raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedFields {
    pub distance: f64,
    pub liters: f64,
    pub efficiency: f64,
    pub cost_per_distance: f64,
}

/// One persisted fill-up, as stored in a sheet row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelEntry {
    #[serde(skip)]
    pub row_number: usize, // ⇔ sheet position (not stored)
    pub timestamp: String,      // ⇔ "Timestamp"
    pub user: String,           // ⇔ "User"
    pub odometer_start: f64,    // ⇔ "Odometer Start"
    pub odometer_end: f64,      // ⇔ "Odometer End"
    pub distance: f64,          // ⇔ "Distance (km)"
    pub liters: f64,            // ⇔ "Liters"
    pub amount_paid: f64,       // ⇔ "Amount Paid (₹)"
    pub efficiency: f64,        // ⇔ "Fuel Efficiency (km/l)"
    pub cost_per_distance: f64, // ⇔ "Cost per KM (₹)"
    pub fuel_price: f64,        // ⇔ "Fuel Price (₹/l)"
}

impl FuelEntry {
    /// Cells in header order.
    pub fn to_cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.timestamp),
            Cell::text(&self.user),
            Cell::Number(self.odometer_start),
            Cell::Number(self.odometer_end),
            Cell::Number(self.distance),
            Cell::Number(self.liters),
            Cell::Number(self.amount_paid),
            Cell::Number(self.efficiency),
            Cell::Number(self.cost_per_distance),
            Cell::Number(self.fuel_price),
        ]
    }

    /// Rebuild an entry from a loaded record.
    pub fn from_record(record: &Record, row_number: usize) -> AppResult<Self> {
        let text = |idx: usize| -> String {
            record
                .get(HEADERS[idx])
                .map(Cell::as_text)
                .unwrap_or_default()
        };
        let num = |idx: usize| -> AppResult<f64> {
            let name = HEADERS[idx];
            match record.get(name) {
                None => Ok(0.0),
                Some(cell) => cell.as_f64().ok_or_else(|| {
                    AppError::Store(format!(
                        "row {}: column '{}' is not a number: {}",
                        row_number, name, cell
                    ))
                }),
            }
        };

        Ok(Self {
            row_number,
            timestamp: text(0),
            user: text(1),
            odometer_start: num(2)?,
            odometer_end: num(3)?,
            distance: num(4)?,
            liters: num(5)?,
            amount_paid: num(6)?,
            efficiency: num(7)?,
            cost_per_distance: num(8)?,
            fuel_price: num(9)?,
        })
    }

    /// The raw inputs this entry was computed from.
    pub fn input(&self) -> EntryInput {
        EntryInput {
            user: self.user.clone(),
            odometer_start: self.odometer_start,
            odometer_end: self.odometer_end,
            amount_paid: self.amount_paid,
            fuel_price: self.fuel_price,
        }
    }

    /// Label used when picking an entry for edit/delete.
    pub fn label(&self) -> String {
        format!("{}: {} - {}", self.row_number, self.timestamp, self.user)
    }
}
