//! Field parsing utilities for NEO and close approach records
//!
//! Helpers that coerce raw CSV text or JSON values into the types the
//! entities need. Callers attach file and record context to failures.

use crate::constants::HAZARDOUS_FLAG;
use serde_json::Value;

/// Parse a diameter, treating an empty value as unknown (NaN)
///
/// Only a truly empty cell is unknown; whitespace alone is not a number.
pub fn parse_diameter(value: &str) -> Option<f64> {
    if value.is_empty() {
        return Some(f64::NAN);
    }
    value.trim().parse::<f64>().ok()
}

/// Whether a `pha` value marks the object as potentially hazardous
pub fn parse_hazard_flag(value: &str) -> bool {
    value == HAZARDOUS_FLAG
}

/// Text of a name field, `None` when empty
pub fn parse_optional_name(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Coerce a JSON number or numeric string to f64
pub fn json_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Coerce a JSON string (or bare number) to text
pub fn json_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce the record count, given either as an integer or a string
pub fn json_to_count(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|c| usize::try_from(c).ok()),
        Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    }
}

/// Render a JSON value for an error message
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
