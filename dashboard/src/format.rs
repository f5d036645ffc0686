//! Number formatting for display.
//!
//! One fixed locale: `.` as decimal point, `,` as thousands separator.

/// Decimal places used for a percentage readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    /// One decimal, large tile readouts and coverage shares
    Tile,
    /// Two decimals, gauge readouts and averages
    Gauge,
}

impl Precision {
    fn decimals(self) -> usize {
        match self {
            Precision::Tile => 1,
            Precision::Gauge => 2,
        }
    }
}

/// Format a percentage with a trailing `%`.
///
/// The value is shown as given (not clamped). Non-finite values render as
/// `"n/a"`.
pub fn format_percent(value: f64, precision: Precision) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    format!("{:.*}%", precision.decimals(), value)
}

/// Group an integer with commas: `3697` -> `"3,697"`.
pub fn group_thousands<T: Into<i128>>(n: T) -> String {
    let n: i128 = n.into();
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn percent_precision_by_context() {
        assert_eq!(format_percent(99.11, Precision::Tile), "99.1%");
        assert_eq!(format_percent(99.11, Precision::Gauge), "99.11%");
        assert_eq!(format_percent(97.8, Precision::Gauge), "97.80%");
        assert_eq!(format_percent(100.0, Precision::Tile), "100.0%");
    }

    #[test]
    fn percent_not_clamped() {
        assert_eq!(format_percent(104.25, Precision::Gauge), "104.25%");
        assert_eq!(format_percent(-1.5, Precision::Tile), "-1.5%");
    }

    #[test]
    fn percent_non_finite() {
        assert_eq!(format_percent(f64::NAN, Precision::Tile), "n/a");
        assert_eq!(format_percent(f64::INFINITY, Precision::Gauge), "n/a");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(3697u64), "3,697");
        assert_eq!(group_thousands(0u64), "0");
        assert_eq!(group_thousands(999u64), "999");
        assert_eq!(group_thousands(1000u64), "1,000");
        assert_eq!(group_thousands(1_234_567u64), "1,234,567");
        assert_eq!(group_thousands(-45_000i64), "-45,000");
    }
}
