//! Safe numeric extraction from loosely typed provider records.
//!
//! Providers null fields out, omit them entirely, stringify large numbers,
//! or return the wrong type for a key. These helpers are the single point
//! at which all of that is neutralized into a well-formed `f64`; every
//! downstream read in the crate goes through them.

use serde_json::Value;

/// Reads `key` from a record-like JSON value as a finite `f64`.
///
/// Returns `None` if the key is absent, the value is null, non-numeric,
/// a non-parsable string, or not finite. Never panics.
#[must_use]
pub fn num(record: &Value, key: &str) -> Option<f64> {
    record.get(key).and_then(coerce)
}

/// Like [`num`], but with a caller-supplied default instead of `None`.
#[must_use]
pub fn num_or(record: &Value, key: &str, default: f64) -> f64 {
    num(record, key).unwrap_or(default)
}

/// Coerces one JSON value to a finite `f64`, if possible.
///
/// Numbers pass through; string-wrapped numbers are parsed (some providers
/// stringify values too large for their JSON encoder). Everything else,
/// including booleans and non-finite results, is rejected.
pub(crate) fn coerce(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
