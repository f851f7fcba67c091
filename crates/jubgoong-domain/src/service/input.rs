//! Weight input helpers

/// Convert an auto-decimal digit string to a weight with two implied
/// decimal places, e.g. "567" -> 5.67. Non-numeric input yields 0.0;
/// the caller rejects non-positive weights before creating an entry.
pub fn convert_auto_decimal(input: &str) -> f64 {
    match input.trim().parse::<i64>() {
        Ok(n) => n as f64 / 100.0,
        Err(_) => 0.0,
    }
}
