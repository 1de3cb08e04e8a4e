//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Odometer / distance: one decimal.
pub fn km(v: f64) -> String {
    format!("{:.1}", v)
}

/// Money, liters and rates: two decimals.
pub fn money(v: f64) -> String {
    format!("{:.2}", v)
}

/// Horizontal bar of `value / max * width` cells. Non-positive values
/// render as an empty bar.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if value <= 0.0 || max <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_use_column_precision() {
        assert_eq!(km(1050.0), "1050.0");
        assert_eq!(money(5.0), "5.00");
        assert_eq!(money(10.456), "10.46");
    }

    #[test]
    fn bars_scale_to_the_maximum() {
        assert_eq!(bar(10.0, 10.0, 4), "████");
        assert_eq!(bar(5.0, 10.0, 4), "██");
        assert_eq!(bar(0.1, 10.0, 4), "█");
        assert_eq!(bar(0.0, 10.0, 4), "");
    }
}
