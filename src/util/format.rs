//! Fixed numeric display formats for the garage widgets.
//!
//! The rules are part of the UI contract: cash is floored, tokens show two
//! decimals, power and top speed round to whole numbers, acceleration and
//! handling keep one decimal, and tune qualities display as whole percents.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Cash balance, floored to a whole amount.
#[allow(clippy::cast_possible_truncation)]
pub fn format_cash(value: f64) -> String {
    format!("{}", value.floor() as i64)
}

/// Token balance with two decimals.
pub fn format_tokens(value: f64) -> String {
    format!("{value:.2}")
}

/// Power / top-speed style stat, rounded to the nearest whole number.
#[allow(clippy::cast_possible_truncation)]
pub fn format_whole_stat(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Acceleration / handling style stat with one decimal.
pub fn format_fine_stat(value: f64) -> String {
    format!("{value:.1}")
}

/// A 0.0–1.0 fraction as a whole percentage, e.g. `0.85` → `"85%"`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_quality_percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Car condition as a whole percentage.
#[allow(clippy::cast_possible_truncation)]
pub fn format_condition(value: f64) -> String {
    format!("{}%", value.round() as i64)
}
