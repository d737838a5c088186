use serde_json::Value;

/// Whether a node is a composite (array or object) rather than a scalar.
pub fn is_composite(value: &Value) -> bool {
    value.is_array() || value.is_object()
}

/// Loose string coercion used by predicates and summarizers: strings render
/// without quotes, everything else via its compact JSON encoding.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_composite() {
        assert!(is_composite(&json!([])));
        assert!(is_composite(&json!({})));
        assert!(!is_composite(&json!("text")));
        assert!(!is_composite(&json!(1.5)));
        assert!(!is_composite(&json!(null)));
    }

    #[test]
    fn test_coerce_to_string() {
        assert_eq!(coerce_to_string(&json!("plain")), "plain");
        assert_eq!(coerce_to_string(&json!(12)), "12");
        assert_eq!(coerce_to_string(&json!(1234.5)), "1234.5");
        assert_eq!(coerce_to_string(&json!(true)), "true");
        assert_eq!(coerce_to_string(&json!(null)), "null");
    }
}
