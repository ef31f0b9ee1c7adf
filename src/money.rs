//! Currency formatting for sale amounts.
//!
//! Amounts arrive loosely typed (operator keystrokes, config values, CLI
//! args), so `Amount` accepts numbers and numeric-looking text alike. A
//! failed parse is not an error: the value becomes NaN and renders as the
//! literal `$NaN`, matching what the rest of the system expects to see.

/// A loosely typed monetary amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(f64);

impl Amount {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(value as f64)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(value as f64)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount(value as f64)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount(value.trim().parse::<f64>().unwrap_or(f64::NAN))
    }
}

impl From<&String> for Amount {
    fn from(value: &String) -> Self {
        Amount::from(value.as_str())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::from(value.as_str())
    }
}

/// Format an amount with exactly two fractional digits, prefixed with `$`.
///
/// Non-numeric input renders as `$NaN` rather than failing.
pub fn format_currency(amount: impl Into<Amount>) -> String {
    format!("${:.2}", amount.into().value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_whole_numbers() {
        assert_eq!(format_currency(9), "$9.00");
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(1234), "$1234.00");
    }

    #[test]
    fn test_formats_negative_amounts() {
        assert_eq!(format_currency(-5), "$-5.00");
        assert_eq!(format_currency(-0.5), "$-0.50");
    }

    #[test]
    fn test_rounds_to_two_digits() {
        assert_eq!(format_currency("19.999"), "$20.00");
        assert_eq!(format_currency(3.14159), "$3.14");
        assert_eq!(format_currency(0.999), "$1.00");
    }

    #[test]
    fn test_parses_numeric_text() {
        assert_eq!(format_currency("12.5"), "$12.50");
        assert_eq!(format_currency("  7 "), "$7.00");
        assert_eq!(format_currency("2.5e2"), "$250.00");
    }

    #[test]
    fn test_non_numeric_fails_open() {
        assert_eq!(format_currency("abc"), "$NaN");
        assert_eq!(format_currency(""), "$NaN");
        assert_eq!(format_currency("12,50"), "$NaN");
    }

    #[test]
    fn test_numeric_output_shape() {
        // $<sign?><digits>.<exactly two digits>
        for value in [0.0, 0.1, 99.99, -3.0, 12345.678] {
            let s = format_currency(value);
            let rest = s.strip_prefix('$').expect("missing $ prefix");
            let rest = rest.strip_prefix('-').unwrap_or(rest);
            let (int, frac) = rest.split_once('.').expect("missing decimal point");
            assert!(!int.is_empty() && int.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(frac.len(), 2);
            assert!(frac.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
