//! Input rules applied before anything reaches the ledger.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::cursor::SessionCursor;
use crate::models::entry::EntryInput;

/// Trimmed, non-empty user name.
pub fn normalize_user(user: &str) -> AppResult<String> {
    let u = user.trim();
    if u.is_empty() {
        return Err(AppError::InvalidInput("user must not be empty".into()));
    }
    Ok(u.to_string())
}

fn ensure_finite(name: &str, v: f64) -> AppResult<()> {
    if !v.is_finite() {
        return Err(AppError::InvalidInput(format!("{name} must be a number")));
    }
    Ok(())
}

/// Rules for a new fill-up.
pub fn validate_add(
    cfg: &Config,
    cursor: SessionCursor,
    odometer_end: f64,
    amount_paid: f64,
    fuel_price: f64,
) -> AppResult<()> {
    ensure_finite("odometer end", odometer_end)?;
    ensure_finite("amount paid", amount_paid)?;
    ensure_finite("fuel price", fuel_price)?;

    let min_end = cursor.last_odometer + cfg.odometer_step;
    // compare at odometer precision so 1000.0 + 0.1 accepts 1000.1
    if (odometer_end * 10.0).round() < (min_end * 10.0).round() {
        return Err(AppError::InvalidInput(format!(
            "odometer end {:.1} must be at least {:.1} (last odometer {:.1})",
            odometer_end, min_end, cursor.last_odometer
        )));
    }

    if amount_paid < 0.0 {
        return Err(AppError::InvalidInput(
            "amount paid must not be negative".into(),
        ));
    }

    if fuel_price < cfg.min_fuel_price {
        return Err(AppError::InvalidInput(format!(
            "fuel price must be at least {:.2}",
            cfg.min_fuel_price
        )));
    }

    Ok(())
}

/// Rules for rewriting an existing row. Ordering between the odometers is
/// not enforced here.
pub fn validate_edit(input: &EntryInput) -> AppResult<()> {
    normalize_user(&input.user)?;
    ensure_finite("odometer start", input.odometer_start)?;
    ensure_finite("odometer end", input.odometer_end)?;
    ensure_finite("amount paid", input.amount_paid)?;
    ensure_finite("fuel price", input.fuel_price)?;

    if input.odometer_start < 0.0 {
        return Err(AppError::InvalidInput(
            "odometer start must not be negative".into(),
        ));
    }
    if input.amount_paid < 0.0 {
        return Err(AppError::InvalidInput(
            "amount paid must not be negative".into(),
        ));
    }
    if input.fuel_price < 0.0 {
        return Err(AppError::InvalidInput(
            "fuel price must not be negative".into(),
        ));
    }
    Ok(())
}

/// Rule for the session start odometer.
pub fn validate_start(odometer: f64) -> AppResult<()> {
    ensure_finite("starting odometer", odometer)?;
    if odometer < 0.0 {
        return Err(AppError::InvalidInput(
            "starting odometer must not be negative".into(),
        ));
    }
    Ok(())
}
