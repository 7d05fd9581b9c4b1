//! Coercion rules applied on the storage → application direction.

use chrono::{DateTime, NaiveDate};
use std::str::FromStr;

/// Safe-numeric-or-zero: absent or non-finite values become `0`.
pub fn number_or_zero(value: Option<f64>) -> f64 {
    number_or(value, 0.0)
}

pub fn number_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

pub fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Blank or absent text becomes `default`.
pub fn text_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Reads `YYYY-MM-DD`, also accepting a full RFC 3339 timestamp.
/// Unreadable dates are treated as absent.
pub fn date(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

pub fn date_string(value: Option<NaiveDate>) -> Option<String> {
    value.map(|d| d.format("%Y-%m-%d").to_string())
}

/// Parses a closed enumeration, falling back to its default for unknown
/// or absent values.
pub fn variant<T: FromStr + Default>(value: Option<&str>) -> T {
    value.and_then(|s| s.parse().ok()).unwrap_or_default()
}
