//! Amount formatting for projected costs

/// Render a cost: whole numbers below `scientific_threshold`, `1.234e15` at or above it
pub fn format_amount(value: f64, scientific_threshold: f64) -> String {
    if value.is_nan() {
        return "0".to_string();
    }
    if value.abs() >= scientific_threshold {
        format!("{:.3e}", value)
    } else {
        format!("{:.0}", value)
    }
}
