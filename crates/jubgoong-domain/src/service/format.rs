//! Display formatting helpers
//!
//! Fixed Thai Baht / kilogram conventions; no locale abstraction.

use chrono::{DateTime, Local, Utc};

/// Format an amount as Thai Baht with thousands separators, e.g. ฿9,320.00.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-฿{}.{:02}", grouped, frac)
    } else {
        format!("฿{}.{:02}", grouped, frac)
    }
}

/// Format a weight with a kg suffix, two decimals.
pub fn format_weight(weight: f64) -> String {
    format!("{:.2} kg", weight)
}

/// Format a timestamp for display in local time.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
