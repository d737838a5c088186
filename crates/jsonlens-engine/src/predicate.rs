use crate::error::{Error, Result};
use crate::summarizer::simple_object_text;
use jsonlens_types::{coerce_to_string, is_composite, PredicateConfig};
use regex::Regex;
use serde_json::Value;

/// A compiled structural/content test against a single JSON node.
///
/// Compiled once from a [`PredicateConfig`]; `test` is a pure function of the
/// node and never recurses into nested composites. Non-objects never match.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Every listed key is defined on the object. A key mapped to `null`
    /// counts as present; only a structurally absent key does not.
    KeysPresent { keys: Vec<String> },

    /// At least one listed key is defined on the object.
    AnyKeyPresent { keys: Vec<String> },

    /// `value[key]` exists and its string coercion matches the pattern
    /// (unanchored, case-sensitive as written).
    ValueRegex { key: String, pattern: Regex },

    /// The object has exactly one key outside `keys_to_ignore`, holds no
    /// nested composites, and its one-line summary fits in `max_length`.
    SimpleObject {
        keys_to_ignore: Vec<String>,
        max_length: usize,
    },
}

impl Predicate {
    pub fn compile(config: &PredicateConfig) -> Result<Self> {
        match config {
            PredicateConfig::KeysPresent(c) => Ok(Self::KeysPresent {
                keys: c.keys.clone(),
            }),
            PredicateConfig::AnyKeyPresent(c) => Ok(Self::AnyKeyPresent {
                keys: c.keys.clone(),
            }),
            PredicateConfig::ValueRegex(c) => {
                let pattern = Regex::new(&c.regex).map_err(|source| Error::Pattern {
                    pattern: c.regex.clone(),
                    source,
                })?;
                Ok(Self::ValueRegex {
                    key: c.key.clone(),
                    pattern,
                })
            }
            PredicateConfig::SimpleObject(c) => Ok(Self::SimpleObject {
                keys_to_ignore: c.keys_to_ignore.clone(),
                max_length: c.max_length,
            }),
        }
    }

    pub fn test(&self, value: &Value) -> bool {
        let Some(object) = value.as_object() else {
            return false;
        };
        match self {
            Self::KeysPresent { keys } => keys.iter().all(|key| object.contains_key(key)),
            Self::AnyKeyPresent { keys } => keys.iter().any(|key| object.contains_key(key)),
            Self::ValueRegex { key, pattern } => match object.get(key) {
                Some(field) => pattern.is_match(&coerce_to_string(field)),
                None => false,
            },
            Self::SimpleObject {
                keys_to_ignore,
                max_length,
            } => {
                let relevant = object
                    .keys()
                    .filter(|key| !keys_to_ignore.contains(*key))
                    .count();
                if relevant != 1 || object.values().any(is_composite) {
                    return false;
                }
                match simple_object_text(object, keys_to_ignore) {
                    Some(text) => text.chars().count() <= *max_length,
                    None => false,
                }
            }
        }
    }
}
