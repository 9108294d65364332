//! Decimal number grammar shared by the coordinate parsers and `is_float`.

use regex::Regex;
use std::sync::OnceLock;

static DECIMAL_RE: OnceLock<Regex> = OnceLock::new();

fn decimal_regex() -> &'static Regex {
    DECIMAL_RE.get_or_init(|| {
        // Optional sign, digits with optional fraction (or a bare fraction), optional exponent.
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$")
            .unwrap_or_else(|e| panic!("invalid decimal pattern: {}", e))
    })
}

/// Whether `value` is a decimal number. Surrounding whitespace is ignored.
pub fn is_decimal(value: &str) -> bool {
    decimal_regex().is_match(value.trim())
}

/// Parse `value` as a decimal number, rejecting anything outside the grammar
/// (`inf`, `NaN`, hex and the like are accepted by `f64::from_str` but not here).
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if !decimal_regex().is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
