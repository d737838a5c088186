use jsonlens_engine::RuleSet;
use jsonlens_types::{is_composite, ViewFlags};
use once_cell::sync::Lazy;
use owo_colors::OwoColorize;
use regex::Regex;
use serde_json::{Map, Value};

/// Prefix that marks a string value as date-like for styling
static DATE_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").expect("static pattern compiles")
});

pub fn is_date_like(text: &str) -> bool {
    DATE_PREFIX.is_match(text)
}

/// Order an object's keys for presentation: alphabetize first, then hoist
/// `id` to the front. Presentation-only; the engine never sees this order.
pub fn order_keys<'a>(object: &'a Map<String, Value>, flags: &ViewFlags) -> Vec<&'a str> {
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    if flags.alphabetize_keys {
        keys.sort_unstable();
    }
    if flags.hoist_id_to_top
        && let Some(position) = keys.iter().position(|key| *key == "id")
    {
        let id = keys.remove(position);
        keys.insert(0, id);
    }
    keys
}

/// Structural hint for a composite node: `[N]` for arrays, `{}` for objects.
pub fn structural_hint(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("[{}]", items.len()),
        _ => "{}".to_string(),
    }
}

/// The plain collapse indicator: optional rule-driven summary, then the
/// structural hint and the expand marker.
pub fn collapse_indicator(value: &Value, rules: &RuleSet) -> String {
    let hint = structural_hint(value);
    match rules.summarize(value) {
        Some(summary) => format!("{} {}▷", summary, hint),
        None => format!("{}▷", hint),
    }
}

/// First root-level key holding a composite value, in presentation order.
/// Drives the jump-to-complex-root-key toggle.
pub fn first_complex_root_key<'a>(value: &'a Value, flags: &ViewFlags) -> Option<&'a str> {
    let object = value.as_object()?;
    order_keys(object, flags)
        .into_iter()
        .find(|key| is_composite(&object[*key]))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Plain,
    Ansi,
}

/// Depth-limited text rendering of a JSON document.
///
/// Every composite row carries its collapse indicator, so summaries stay
/// visible whether or not the row is expanded. Scalar rows show the
/// JSON-encoded value.
pub struct TreeRenderer<'a> {
    rules: &'a RuleSet,
    flags: ViewFlags,
    max_depth: usize,
    color: ColorMode,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(rules: &'a RuleSet, flags: ViewFlags, max_depth: usize, color: ColorMode) -> Self {
        Self {
            rules,
            flags,
            max_depth: max_depth.max(1),
            color,
        }
    }

    pub fn render(&self, value: &Value) -> String {
        let mut out = String::new();
        self.render_node(value, 0, &mut out);
        out
    }

    fn render_node(&self, value: &Value, depth: usize, out: &mut String) {
        match value {
            Value::Array(items) => {
                if items.is_empty() {
                    self.push_row(out, depth, None, &self.marker_text("[Empty Array]"));
                    return;
                }
                for (index, item) in items.iter().enumerate() {
                    self.render_entry(&index.to_string(), item, depth, out);
                }
            }
            Value::Object(object) => {
                if object.is_empty() {
                    self.push_row(out, depth, None, &self.marker_text("[Empty Object]"));
                    return;
                }
                for key in order_keys(object, &self.flags) {
                    self.render_entry(key, &object[key], depth, out);
                }
            }
            scalar => {
                let text = self.scalar_text(scalar);
                self.push_row(out, depth, None, &text);
            }
        }
    }

    fn render_entry(&self, key: &str, value: &Value, depth: usize, out: &mut String) {
        if is_composite(value) {
            let indicator = self.composite_text(value);
            self.push_row(out, depth, Some(key), &indicator);
            if depth + 1 < self.max_depth {
                self.render_node(value, depth + 1, out);
            }
        } else {
            let text = self.scalar_text(value);
            self.push_row(out, depth, Some(key), &text);
        }
    }

    fn composite_text(&self, value: &Value) -> String {
        let hint = format!("{}▷", structural_hint(value));
        match (self.rules.summarize(value), self.color) {
            (Some(summary), ColorMode::Ansi) => {
                format!("{} {}", summary.italic(), hint.dimmed())
            }
            (Some(summary), ColorMode::Plain) => format!("{} {}", summary, hint),
            (None, ColorMode::Ansi) => format!("{}", hint.dimmed()),
            (None, ColorMode::Plain) => hint,
        }
    }

    fn scalar_text(&self, value: &Value) -> String {
        let encoded = value.to_string();
        if self.color == ColorMode::Plain {
            return encoded;
        }
        if value.as_str().is_some_and(is_date_like) {
            format!("{}", encoded.yellow())
        } else {
            format!("{}", encoded.red())
        }
    }

    fn marker_text(&self, text: &str) -> String {
        match self.color {
            ColorMode::Ansi => format!("{}", text.blue()),
            ColorMode::Plain => text.to_string(),
        }
    }

    fn push_row(&self, out: &mut String, depth: usize, key: Option<&str>, text: &str) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        if let Some(key) = key {
            out.push_str(key);
            out.push_str(": ");
        }
        out.push_str(text);
        out.push('\n');
    }
}
