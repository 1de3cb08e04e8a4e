use crate::core::derive::round_to;
use crate::models::entry::FuelEntry;
use clap::ValueEnum;

/// Series that can be plotted against the timestamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    Efficiency,
    Cost,
}

impl Metric {
    pub fn title(&self) -> &'static str {
        match self {
            Metric::Efficiency => "Fuel Efficiency Over Time (km/l)",
            Metric::Cost => "Cost per KM Over Time (₹)",
        }
    }

    pub fn value(&self, e: &FuelEntry) -> f64 {
        match self {
            Metric::Efficiency => e.efficiency,
            Metric::Cost => e.cost_per_distance,
        }
    }
}

/// (timestamp, value) points in row order. The x axis is the timestamp
/// string, not a time scale.
pub fn series(entries: &[&FuelEntry], metric: Metric) -> Vec<(String, f64)> {
    entries
        .iter()
        .map(|e| (e.timestamp.clone(), metric.value(e)))
        .collect()
}

/// Totals over a set of entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub entries: usize,
    pub total_distance: f64,
    pub total_liters: f64,
    pub total_spent: f64,
    /// Total distance over total liters.
    pub avg_efficiency: f64,
    /// Total spent over total distance.
    pub avg_cost_per_km: f64,
    pub best_efficiency: Option<f64>,
    pub worst_efficiency: Option<f64>,
}

pub fn summarize(entries: &[&FuelEntry]) -> Summary {
    let total_distance: f64 = entries.iter().map(|e| e.distance).sum();
    let total_liters: f64 = entries.iter().map(|e| e.liters).sum();
    let total_spent: f64 = entries.iter().map(|e| e.amount_paid).sum();

    let efficiencies = entries
        .iter()
        .map(|e| e.efficiency)
        .filter(|v| *v > 0.0);

    Summary {
        entries: entries.len(),
        total_distance: round_to(total_distance, 1),
        total_liters: round_to(total_liters, 2),
        total_spent: round_to(total_spent, 2),
        avg_efficiency: if total_liters > 0.0 {
            round_to(total_distance / total_liters, 2)
        } else {
            0.0
        },
        avg_cost_per_km: if total_distance > 0.0 {
            round_to(total_spent / total_distance, 2)
        } else {
            0.0
        },
        best_efficiency: efficiencies.clone().reduce(f64::max),
        worst_efficiency: efficiencies.reduce(f64::min),
    }
}
