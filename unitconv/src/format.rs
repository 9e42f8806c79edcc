//! Result rendering

/// Render a converted value with fixed 4-decimal precision
pub fn format_value(value: f64) -> String {
    format!("{:.4}", value)
}
