//! Numeric input coercion
//!
//! Form fields are free text. Nothing here fails: unparsable or non-finite
//! input becomes 0 (or the nearest bound) so every tool stays total.

use tracing::trace;

/// Parse a form field into a number, falling back to 0
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            trace!(input = trimmed, "unparsable numeric input coerced to 0");
            0.0
        }
    }
}

/// Clamp into `[min, max]`; non-finite values collapse to `min`
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.clamp(min, max)
}

/// Floor at zero; NaN becomes zero
pub fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert!((parse_number(" 12.5 ") - 12.5).abs() < f64::EPSILON);
        assert!((parse_number("-3") + 3.0).abs() < f64::EPSILON);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
    }

    #[test]
    fn test_clamp_finite() {
        assert_eq!(clamp_finite(f64::NAN, 1.0, 100.0), 1.0);
        assert_eq!(clamp_finite(f64::INFINITY, 0.0, 10.0), 0.0);
        assert_eq!(clamp_finite(500.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp_finite(-5.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(-1.0), 0.0);
        assert_eq!(non_negative(f64::NAN), 0.0);
        assert_eq!(non_negative(4.0), 4.0);
    }
}
