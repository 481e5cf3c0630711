//! Formatting helpers for presenting summary figures.

use chrono::NaiveDate;

/// One decimal place, always: whole numbers render as e.g. "4.0".
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Grouped-digit amount prefixed with the currency code, e.g. "LKR 12,500".
///
/// Revenue figures arrive as whole currency units; fractions round to the
/// nearest unit.
pub fn format_currency(code: &str, amount: f64) -> String {
    format!("{} {}", code, group_thousands(amount.round() as i64))
}

/// Insert comma separators every three digits, right to left.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Short weekday label under a trend bar, e.g. "Mon".
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Fuller label for bar tooltips and pie legends, e.g. "Mon, Jan 6".
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}
