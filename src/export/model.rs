// src/export/model.rs

use crate::models::entry::FuelEntry;
use crate::sheet::HEADERS;
use crate::utils::formatting::{km, money};
use serde::Serialize;

/// Flat export row. Field names are the sheet headers, so CSV and JSON
/// output read like the sheet itself.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Odometer Start")]
    pub odometer_start: f64,
    #[serde(rename = "Odometer End")]
    pub odometer_end: f64,
    #[serde(rename = "Distance (km)")]
    pub distance: f64,
    #[serde(rename = "Liters")]
    pub liters: f64,
    #[serde(rename = "Amount Paid (₹)")]
    pub amount_paid: f64,
    #[serde(rename = "Fuel Efficiency (km/l)")]
    pub efficiency: f64,
    #[serde(rename = "Cost per KM (₹)")]
    pub cost_per_distance: f64,
    #[serde(rename = "Fuel Price (₹/l)")]
    pub fuel_price: f64,
}

impl From<&FuelEntry> for EntryExport {
    fn from(e: &FuelEntry) -> Self {
        Self {
            timestamp: e.timestamp.clone(),
            user: e.user.clone(),
            odometer_start: e.odometer_start,
            odometer_end: e.odometer_end,
            distance: e.distance,
            liters: e.liters,
            amount_paid: e.amount_paid,
            efficiency: e.efficiency,
            cost_per_distance: e.cost_per_distance,
            fuel_price: e.fuel_price,
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    HEADERS.to_vec()
}

/// Cell texts in header order, at sheet precision.
pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.timestamp.clone(),
        e.user.clone(),
        km(e.odometer_start),
        km(e.odometer_end),
        km(e.distance),
        money(e.liters),
        money(e.amount_paid),
        money(e.efficiency),
        money(e.cost_per_distance),
        money(e.fuel_price),
    ]
}
