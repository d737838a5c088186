use crate::path::{breadcrumb, Segment};
use jsonlens_types::{coerce_to_string, is_composite};
use serde_json::Value;

/// Case-insensitive substring search over keys and scalar value text,
/// returning breadcrumb paths in document order.
pub fn find_paths(root: &Value, query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let mut hits = Vec::new();
    let mut trail = Vec::new();
    walk(root, &needle, &mut trail, &mut hits);
    hits
}

fn walk(value: &Value, needle: &str, trail: &mut Vec<Segment>, hits: &mut Vec<String>) {
    match value {
        Value::Object(object) => {
            for (key, child) in object {
                trail.push(Segment::Key(key.clone()));
                if key.to_lowercase().contains(needle) || scalar_matches(child, needle) {
                    hits.push(breadcrumb(trail));
                }
                walk(child, needle, trail, hits);
                trail.pop();
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                trail.push(Segment::Index(index));
                if scalar_matches(child, needle) {
                    hits.push(breadcrumb(trail));
                }
                walk(child, needle, trail, hits);
                trail.pop();
            }
        }
        _ => {}
    }
}

fn scalar_matches(value: &Value, needle: &str) -> bool {
    !is_composite(value) && coerce_to_string(value).to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_matches_keys_and_values() {
        let document = json!({
            "orderId": "A-17",
            "items": [{"sku": "ORD-99"}],
            "note": "plain"
        });

        assert_eq!(
            find_paths(&document, "ord"),
            vec![".orderId".to_string(), ".items.[0].sku".to_string()]
        );
    }

    #[test]
    fn test_find_is_case_insensitive_and_coerces() {
        let document = json!({"count": 42, "active": true});

        assert_eq!(find_paths(&document, "42"), vec![".count".to_string()]);
        assert_eq!(find_paths(&document, "TRUE"), vec![".active".to_string()]);
    }

    #[test]
    fn test_blank_query_finds_nothing() {
        let document = json!({"a": 1});
        assert!(find_paths(&document, "   ").is_empty());
    }
}
