//! Text rendering of service replies for display containers.
//!
//! The output follows `JSON.stringify(value, null, 2)`: two-space indent,
//! object keys in the order the service sent them, and floats with no
//! fractional part written as integers (`1.0` becomes `1`).

use crate::utils::error::Result;
use serde_json::{Number, Value};

/// 2^63 and 2^64 as f64; integral floats below these fit i64 / u64 exactly.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

pub fn to_pretty_text(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(&normalize(value))?)
}

fn normalize(value: &Value) -> Value {
    match value {
        Value::Number(n) => normalize_number(n),
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), normalize(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn normalize_number(n: &Number) -> Value {
    let f = match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => f,
        _ => return Value::Number(n.clone()),
    };

    // -0 也輸出為 0
    if f == 0.0 {
        Value::from(0)
    } else if (-I64_BOUND..I64_BOUND).contains(&f) {
        Value::from(f as i64)
    } else if (0.0..U64_BOUND).contains(&f) {
        Value::from(f as u64)
    } else {
        Value::Number(n.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_service_key_order() {
        let value: Value = serde_json::from_str(r#"{"Bob": 3, "Alice": 1}"#).unwrap();
        assert_eq!(
            to_pretty_text(&value).unwrap(),
            "{\n  \"Bob\": 3,\n  \"Alice\": 1\n}"
        );
    }

    #[test]
    fn test_integral_floats_print_as_integers() {
        let value: Value =
            serde_json::from_str(r#"[1.0, -2.0, -0.0, 2.5, 12345678901.0, {"n": 4.0}]"#).unwrap();
        assert_eq!(
            to_pretty_text(&value).unwrap(),
            "[\n  1,\n  -2,\n  0,\n  2.5,\n  12345678901,\n  {\n    \"n\": 4\n  }\n]"
        );
    }

    #[test]
    fn test_empty_containers_and_scalars() {
        assert_eq!(to_pretty_text(&serde_json::json!({})).unwrap(), "{}");
        assert_eq!(to_pretty_text(&serde_json::json!([])).unwrap(), "[]");
        assert_eq!(to_pretty_text(&Value::Null).unwrap(), "null");
        assert_eq!(to_pretty_text(&serde_json::json!("é")).unwrap(), "\"é\"");
    }
}
