//! # Result Formatting
//!
//! Turns computed values into display strings:
//!
//! - Integers render without a decimal point (`8.0` -> `"8"`)
//! - Fractions render with at most [`DEFAULT_PRECISION`] fractional digits,
//!   trailing zeros stripped (`1/3` -> `"0.333333"`, `2.5` -> `"2.5"`)
//! - Never scientific notation
//!
//! ## Example
//!
//! ```rust
//! use calc_core::format::format_result;
//!
//! assert_eq!(format_result(8.0), "8");
//! assert_eq!(format_result(1.0 / 3.0), "0.333333");
//! assert_eq!(format_result(2.5), "2.5");
//! ```

/// Fractional digits kept when a result is not an integer
pub const DEFAULT_PRECISION: usize = 6;

/// Display sentinel for the error state
pub const ERROR_DISPLAY: &str = "Error";

/// Format a value with the default precision.
pub fn format_result(value: f64) -> String {
    format_result_with_precision(value, DEFAULT_PRECISION)
}

/// Format a value keeping at most `precision` fractional digits.
///
/// Non-finite values have no display form and render as [`ERROR_DISPLAY`].
pub fn format_result_with_precision(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    // f64's Display never switches to exponent form
    let formatted = if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        let fixed = format!("{:.*}", precision, value);
        trim_fraction(&fixed).to_string()
    };

    // -0 and values like -0.0000001 collapse to a signed zero
    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}

/// Strip trailing zeros, then a dangling decimal point.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_result(8.0), "8");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-16.0), "-16");
        assert_eq!(format_result(1e20), "100000000000000000000");
    }

    #[test]
    fn test_repeating_decimal() {
        assert_eq!(format_result(1.0 / 3.0), "0.333333");
        assert_eq!(format_result(2.0 / 3.0), "0.666667");
    }

    #[test]
    fn test_trailing_zeros() {
        assert_eq!(format_result(2.500000), "2.5");
        assert_eq!(format_result(-0.25), "-0.25");
    }

    #[test]
    fn test_rounds_to_integer() {
        assert_eq!(format_result(1.0000001), "1");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(-0.0000001), "0");
    }

    #[test]
    fn test_no_scientific_notation() {
        assert!(!format_result(1e-5).contains('e'));
        assert_eq!(format_result(1e-5), "0.00001");
        assert!(!format_result(123456789012.5).contains('e'));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_result(f64::INFINITY), ERROR_DISPLAY);
        assert_eq!(format_result(f64::NAN), ERROR_DISPLAY);
    }

    #[test]
    fn test_custom_precision() {
        assert_eq!(format_result_with_precision(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_result_with_precision(2.25, 0), "2");
    }
}
