//! Loose input coercion
//!
//! Tool hosts pass parameters as JSON, and callers routinely send numbers as
//! strings or floats where an integer is declared. Each function here makes a
//! best-effort conversion to the target type and returns `None` when the value
//! cannot represent it. Conversion never fails loudly.

use serde_json::Value;

/// Coerce a JSON value to text.
///
/// Strings pass through, numbers and booleans render to their display form.
/// Null, arrays, and objects are absent.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerce a JSON value to an integer.
///
/// Floats truncate toward zero; strings must parse as a plain integer
/// (a fractional string like `"10.5"` is absent, not rounded).
pub fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerce a JSON value to a float.
pub fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&json!("hello")), Some("hello".to_string()));
        assert_eq!(to_text(&json!(42)), Some("42".to_string()));
        assert_eq!(to_text(&json!(3.5)), Some("3.5".to_string()));
        assert_eq!(to_text(&json!(true)), Some("true".to_string()));
        assert_eq!(to_text(&Value::Null), None);
        assert_eq!(to_text(&json!([1, 2])), None);
        assert_eq!(to_text(&json!({"a": 1})), None);
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int(&json!(10)), Some(10));
        assert_eq!(to_int(&json!(-3)), Some(-3));
        assert_eq!(to_int(&json!(10.9)), Some(10));
        assert_eq!(to_int(&json!(-10.9)), Some(-10));
        assert_eq!(to_int(&json!("25")), Some(25));
        assert_eq!(to_int(&json!(" 25 ")), Some(25));
        assert_eq!(to_int(&json!(true)), Some(1));
        assert_eq!(to_int(&json!("10.5")), None);
        assert_eq!(to_int(&json!("not a number")), None);
        assert_eq!(to_int(&Value::Null), None);
        assert_eq!(to_int(&json!([])), None);
    }

    #[test]
    fn test_to_float() {
        assert_eq!(to_float(&json!(37.7)), Some(37.7));
        assert_eq!(to_float(&json!(-122)), Some(-122.0));
        assert_eq!(to_float(&json!("-122.4")), Some(-122.4));
        assert_eq!(to_float(&json!(false)), Some(0.0));
        assert_eq!(to_float(&json!("north")), None);
        assert_eq!(to_float(&Value::Null), None);
        assert_eq!(to_float(&json!({})), None);
    }
}
