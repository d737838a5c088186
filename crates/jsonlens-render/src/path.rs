use serde_json::Value;

/// One step in a breadcrumb trail: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Format a trail as a hash-style breadcrumb: `.user.orders.[0].status`.
/// The empty trail is the document root, written `.`.
pub fn breadcrumb(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return ".".to_string();
    }
    let mut out = String::new();
    for segment in segments {
        out.push('.');
        match segment {
            Segment::Key(key) => out.push_str(key),
            Segment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

/// Resolve a breadcrumb string against a document.
///
/// A leading `#`, a leading `.` and index brackets are all stripped before
/// segments are matched, so `.a.[0].b`, `#.a.0.b` and `a.0.b` address the
/// same node.
pub fn resolve_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let cleaned = path.trim().trim_start_matches('#').replace(['[', ']'], "");
    let mut current = root;
    for segment in cleaned.split('.').filter(|s| !s.is_empty()) {
        current = match current {
            Value::Object(object) => object.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
