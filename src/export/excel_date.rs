// src/export/excel_date.rs

use crate::models::entry::TIMESTAMP_FORMAT;
use chrono::{NaiveDate, NaiveDateTime};

/// Excel serial number + number format for a `Timestamp` cell.
pub(crate) fn timestamp_to_excel(s: &str) -> Option<(&'static str, f64)> {
    let dt = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()?;
    Some(("yyyy-mm-dd hh:mm:ss", naive_datetime_to_excel_serial(&dt)))
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();

    let duration = *dt - excel_epoch;
    duration.num_seconds() as f64 / 86400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_is_half_a_day() {
        let (fmt, serial) = timestamp_to_excel("2025-01-01 12:00:00").unwrap();
        assert_eq!(fmt, "yyyy-mm-dd hh:mm:ss");
        assert_eq!(serial, 45658.5);
    }

    #[test]
    fn other_text_is_not_a_timestamp() {
        assert!(timestamp_to_excel("2025-01-01").is_none());
        assert!(timestamp_to_excel("Prof. S. Rao").is_none());
    }
}
