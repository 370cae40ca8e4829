//! Tolerant numeric conversion shared by the catalog and the normalizer.
//!
//! Backend values arrive as JSON numbers, stringified numbers (sometimes
//! with a comma decimal separator), or garbage. Anything that does not
//! resolve to a finite float is treated as absent, never as zero.

use serde_json::Value;

/// Parses a JSON value into a finite float, or `None`.
///
/// Accepts numbers and numeric strings; a comma decimal separator is
/// tolerated ("12,5" parses as 12.5). Booleans, nulls, objects, arrays,
/// and non-finite results are all absent.
pub fn parse_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .parse::<f64>()
                .ok()
                .or_else(|| trimmed.replace(',', ".").parse::<f64>().ok())
        }
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Rounds to 2 decimal places (half away from zero).
///
/// Displayed figures and their aggregation both use this, so totals match
/// the visible per-row values exactly.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
