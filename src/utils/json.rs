//! JSON value helpers for loosely-typed request bodies.

use serde_json::Value;

/// JSON truthiness: null, false, 0, NaN and "" are falsy; objects and arrays
/// are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a truthy value; falsy values read as absent. Strings are
/// taken as-is, every other truthy value as its compact JSON text.
pub fn truthy_text(value: Value) -> Option<String> {
    if !is_truthy(&value) {
        return None;
    }
    Some(match value {
        Value::String(s) => s,
        other => other.to_string(),
    })
}
