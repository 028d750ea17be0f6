//! Value coercion shared by the adapters.
//!
//! Blank source values become `None` so the validator reports them as
//! missing. A blank score is never turned into zero.

use std::sync::LazyLock;

use creditnorm_core::CanonicalField;
use regex::Regex;
use serde_json::Value;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?)(\d+)").expect("leading integer pattern is valid"));

/// Trim `raw`; empty becomes `None`.
pub fn text_or_none(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Read the leading digit run of `raw` as an integer.
///
/// Leading whitespace and a single sign are allowed. Text with no leading
/// digits reads as `0`; values beyond `i64` saturate.
pub fn leading_integer(raw: &str) -> i64 {
    let Some(caps) = LEADING_INTEGER.captures(raw) else {
        return 0;
    };
    let negative = &caps[1] == "-";
    match caps[2].parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Trim `raw`; empty becomes `None`, anything else is read with
/// [`leading_integer`].
pub fn score_or_none(field: CanonicalField, raw: Option<&str>) -> Option<i64> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    if !LEADING_INTEGER.is_match(raw) {
        tracing::warn!(field = field.name(), "score has no leading digits; reading as 0");
    }
    Some(leading_integer(raw))
}

/// A JSON scalar as text. Strings pass through untouched; numbers and
/// booleans are rendered. Null, objects and arrays have no text.
pub fn json_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// A JSON number as an integer score.
///
/// Integers pass through as-is and integral floats are accepted. Strings are
/// not coerced. A value that cannot be used as a score (`"720"`, `700.5`,
/// `true`) is treated as absent, so validation reports the field in
/// [`MissingFields`](creditnorm_core::NormalizeError::MissingFields) even
/// though the payload carries something there. A `warn` event names the field.
pub fn json_score(field: CanonicalField, value: Option<&Value>) -> Option<i64> {
    let value = value?;
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            Some(f as i64)
        }
        _ => {
            if !value.is_null() {
                tracing::warn!(field = field.name(), "score is not an integer; treating as absent");
            }
            None
        }
    }
}
