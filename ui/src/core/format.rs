//! Formatting helpers for presenting metrics.

/// Fraction in `[0, 1]` as a percentage rounded to one decimal (`0.823` → `82.3`).
pub fn percent_value(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}

/// Fraction as a one-decimal percentage string without the `%` sign.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}", percent_value(fraction))
}

/// Byte count as kibibytes with one decimal (`2048` → `2.0 KB`).
pub fn format_kib(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}
