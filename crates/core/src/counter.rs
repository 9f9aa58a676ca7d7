//! Display-value parsing for the animated stat counters.
//!
//! A stat is stored as a display string such as `"50+"` or `"99%"`. The
//! leading run of ASCII digits is the count-up target; whatever follows is
//! a suffix re-appended on every animation frame.

use serde::Serialize;

/// A parsed counter display value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterValue {
    pub target: u64,
    pub suffix: String,
}

/// Split `display` into its leading integer and the remaining suffix.
///
/// No leading digit yields a target of 0 with the whole string as suffix.
/// A digit run too large for `u64` saturates at `u64::MAX`.
pub fn parse_counter_value(display: &str) -> CounterValue {
    let digits_end = display
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(display.len());
    let (digits, suffix) = display.split_at(digits_end);

    let target = digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });

    CounterValue {
        target,
        suffix: suffix.to_string(),
    }
}

impl CounterValue {
    /// Interpolated count for an animation `progress` in `[0, 1]`.
    ///
    /// Out-of-range and NaN progress values are clamped; the final frame
    /// always lands exactly on `target`.
    pub fn value_at(&self, progress: f64) -> u64 {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        if progress >= 1.0 {
            return self.target;
        }
        ((self.target as f64) * progress).floor() as u64
    }

    /// Text shown for an animation frame: the interpolated count plus suffix.
    pub fn display_at(&self, progress: f64) -> String {
        format!("{}{}", self.value_at(progress), self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cv(target: u64, suffix: &str) -> CounterValue {
        CounterValue {
            target,
            suffix: suffix.to_string(),
        }
    }

    #[test]
    fn parses_plus_suffix() {
        assert_eq!(parse_counter_value("50+"), cv(50, "+"));
    }

    #[test]
    fn parses_percent_suffix() {
        assert_eq!(parse_counter_value("99%"), cv(99, "%"));
    }

    #[test]
    fn non_numeric_string_is_all_suffix() {
        assert_eq!(parse_counter_value("N/A"), cv(0, "N/A"));
    }

    #[test]
    fn empty_string() {
        assert_eq!(parse_counter_value(""), cv(0, ""));
    }

    #[test]
    fn bare_number_has_empty_suffix() {
        assert_eq!(parse_counter_value("120"), cv(120, ""));
    }

    #[test]
    fn only_leading_digits_count() {
        assert_eq!(parse_counter_value("1,000+"), cv(1, ",000+"));
        assert_eq!(parse_counter_value(" 5"), cv(0, " 5"));
        assert_eq!(parse_counter_value("24/7"), cv(24, "/7"));
    }

    #[test]
    fn huge_digit_run_saturates() {
        let value = parse_counter_value("99999999999999999999999k");
        assert_eq!(value.target, u64::MAX);
        assert_eq!(value.suffix, "k");
    }

    #[test]
    fn interpolation_endpoints() {
        let value = cv(50, "+");
        assert_eq!(value.value_at(0.0), 0);
        assert_eq!(value.value_at(0.5), 25);
        assert_eq!(value.value_at(1.0), 50);
        assert_eq!(value.value_at(3.0), 50);
        assert_eq!(value.value_at(-1.0), 0);
        assert_eq!(value.value_at(f64::NAN), 0);
    }

    #[test]
    fn display_reappends_suffix() {
        let value = parse_counter_value("99%");
        assert_eq!(value.display_at(1.0), "99%");
        assert_eq!(value.display_at(0.0), "0%");
    }
}
