/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out derived values that hit the zero guard.
pub fn colorize_derived(value: f64, text: &str) -> String {
    if value == 0.0 {
        format!("{GREY}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Compare a value against a reference:
/// better → green, worse → red, equal → reset.
/// For efficiency higher is better, for cost lower is better.
pub fn color_against(value: f64, reference: f64, higher_is_better: bool) -> &'static str {
    if value == reference || value == 0.0 {
        return RESET;
    }
    if (value > reference) == higher_is_better {
        GREEN
    } else {
        RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_guarded_values_are_grey() {
        assert_eq!(colorize_derived(0.0, "0.00"), format!("{GREY}0.00{RESET}"));
        assert_eq!(colorize_derived(1.5, "1.50"), "1.50");
    }

    #[test]
    fn direction_depends_on_metric() {
        assert_eq!(color_against(12.0, 10.0, true), GREEN);
        assert_eq!(color_against(12.0, 10.0, false), RED);
        assert_eq!(color_against(10.0, 10.0, true), RESET);
    }
}
