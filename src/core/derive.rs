//! Derived-field computation and persistence rounding.

use crate::models::entry::{DerivedFields, EntryInput, FuelEntry};

/// Compute distance, liters, efficiency and cost per km.
///
/// Total over all inputs: any quotient whose denominator is not strictly
/// positive is 0.
pub fn compute_derived(
    odometer_start: f64,
    odometer_end: f64,
    amount_paid: f64,
    fuel_price: f64,
) -> DerivedFields {
    let distance = odometer_end - odometer_start;
    let liters = if fuel_price > 0.0 {
        amount_paid / fuel_price
    } else {
        0.0
    };
    let efficiency = if liters > 0.0 { distance / liters } else { 0.0 };
    let cost_per_distance = if distance > 0.0 {
        amount_paid / distance
    } else {
        0.0
    };

    DerivedFields {
        distance,
        liters,
        efficiency,
        cost_per_distance,
    }
}

/// Round half away from zero to `dp` decimal places.
pub fn round_to(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    let rounded = (value * factor).round() / factor;
    // normalise -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Build the persisted entry: derived fields from the unrounded inputs,
/// then 1 dp for odometers/distance and 2 dp for everything monetary.
pub fn build_entry(timestamp: &str, input: &EntryInput, row_number: usize) -> FuelEntry {
    let d = compute_derived(
        input.odometer_start,
        input.odometer_end,
        input.amount_paid,
        input.fuel_price,
    );

    FuelEntry {
        row_number,
        timestamp: timestamp.to_string(),
        user: input.user.clone(),
        odometer_start: round_to(input.odometer_start, 1),
        odometer_end: round_to(input.odometer_end, 1),
        distance: round_to(d.distance, 1),
        liters: round_to(d.liters, 2),
        amount_paid: round_to(input.amount_paid, 2),
        efficiency: round_to(d.efficiency, 2),
        cost_per_distance: round_to(d.cost_per_distance, 2),
        fuel_price: round_to(input.fuel_price, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(start: f64, end: f64, paid: f64, price: f64) -> EntryInput {
        EntryInput {
            user: "A".into(),
            odometer_start: start,
            odometer_end: end,
            amount_paid: paid,
            fuel_price: price,
        }
    }

    #[test]
    fn regular_fill_up() {
        let d = compute_derived(1000.0, 1050.0, 500.0, 100.0);
        assert_eq!(d.distance, 50.0);
        assert_eq!(d.liters, 5.0);
        assert_eq!(d.efficiency, 10.0);
        assert_eq!(d.cost_per_distance, 10.0);
    }

    #[test]
    fn non_positive_price_zeroes_liters_and_efficiency() {
        for price in [0.0, -1.0, -250.5] {
            let d = compute_derived(1000.0, 1300.0, 500.0, price);
            assert_eq!(d.liters, 0.0);
            assert_eq!(d.efficiency, 0.0);
            assert_eq!(d.distance, 300.0);
        }
    }

    #[test]
    fn non_positive_distance_zeroes_cost_per_km() {
        let zero = compute_derived(1000.0, 1000.0, 500.0, 100.0);
        assert_eq!(zero.distance, 0.0);
        assert_eq!(zero.cost_per_distance, 0.0);
        assert_eq!(zero.liters, 5.0);
        assert_eq!(zero.efficiency, 0.0);

        let negative = compute_derived(1000.0, 990.0, 500.0, 100.0);
        assert_eq!(negative.distance, -10.0);
        assert_eq!(negative.cost_per_distance, 0.0);
        assert_eq!(negative.efficiency, -2.0);
    }

    #[test]
    fn zero_payment_is_total() {
        let d = compute_derived(0.0, 120.0, 0.0, 100.0);
        assert_eq!(d.liters, 0.0);
        assert_eq!(d.efficiency, 0.0);
        assert_eq!(d.cost_per_distance, 0.0);
    }

    #[test]
    fn rounding_is_applied_only_at_persistence() {
        // liters = 333.33.. / 97.3 = 3.4258..; efficiency uses the unrounded value
        let e = build_entry("2025-01-01 00:00:00", &input(100.04, 145.06, 333.333, 97.3), 2);
        assert_eq!(e.odometer_start, 100.0);
        assert_eq!(e.odometer_end, 145.1);
        assert_eq!(e.distance, 45.0);
        assert_eq!(e.liters, 3.43);
        assert_eq!(e.amount_paid, 333.33);
        assert_eq!(e.fuel_price, 97.3);

        let exact = compute_derived(100.04, 145.06, 333.333, 97.3);
        assert_eq!(e.efficiency, round_to(exact.efficiency, 2));
        assert_eq!(e.cost_per_distance, round_to(exact.cost_per_distance, 2));
        assert_eq!(e.efficiency, 13.14);
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(-0.001, 2), 0.0);
        assert!(round_to(-0.001, 2).is_sign_positive());
    }
}
