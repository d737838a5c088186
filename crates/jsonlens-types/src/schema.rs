//! Wire shape of summarization rule descriptors.
//!
//! Descriptors are plain JSON records with a `type` discriminator, exactly as
//! stored in user configuration. Deserialization is the validation step:
//! missing required fields and unknown discriminators are rejected here, so
//! the engine only ever compiles well-formed records.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One rule descriptor: predicates (AND-combined) plus the summarizer to run
/// when all of them match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub predicates: Vec<PredicateConfig>,
    pub summarizer: SummarizerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PredicateConfig {
    KeysPresent(KeysConfig),
    AnyKeyPresent(KeysConfig),
    ValueRegex(ValueRegexConfig),
    SimpleObject(SimpleObjectConfig),
}

/// Shared payload for `keysPresent` and `anyKeyPresent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeysConfig {
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRegexConfig {
    pub key: String,
    pub regex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleObjectConfig {
    #[serde(default)]
    pub keys_to_ignore: Vec<String>,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for SimpleObjectConfig {
    fn default() -> Self {
        Self {
            keys_to_ignore: Vec::new(),
            max_length: default_max_length(),
        }
    }
}

fn default_max_length() -> usize {
    30
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SummarizerConfig {
    Static(StaticConfig),
    KeyValue(KeyValueConfig),
    JoinedValues(JoinedValuesConfig),
    FinancialAmount(FinancialAmountConfig),
    SimpleObject(SimpleSummaryConfig),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticConfig {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValueConfig {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedValuesConfig {
    pub keys: Vec<String>,
    #[serde(default = "default_joiner")]
    pub joiner: String,
}

fn default_joiner() -> String {
    "-".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSummaryConfig {
    #[serde(default)]
    pub keys_to_ignore: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAmountConfig {
    pub amount_key: String,
    pub currency_key: String,
}

/// Parse a JSON document holding an ordered list of rule descriptors (the
/// shape users paste into the custom-rules editor).
pub fn parse_rule_configs(content: &str) -> Result<Vec<RuleConfig>> {
    let document: Value = serde_json::from_str(content)?;
    if !document.is_array() {
        return Err(Error::Config(
            "custom rules must be a JSON array of rule descriptors".to_string(),
        ));
    }
    Ok(serde_json::from_value(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_round_trip() {
        let raw = r#"[
            {
                "predicates": [
                    {"type": "keysPresent", "keys": ["apiType", "code"]},
                    {"type": "valueRegex", "key": "apiType", "regex": "[Aa]ction"}
                ],
                "summarizer": {"type": "keyValue", "key": "code"}
            }
        ]"#;

        let configs = parse_rule_configs(raw).expect("valid descriptors");
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].predicates.len(), 2);
        assert_eq!(
            configs[0].summarizer,
            SummarizerConfig::KeyValue(KeyValueConfig {
                key: "code".to_string()
            })
        );

        let encoded = serde_json::to_string(&configs).expect("serializable");
        let decoded = parse_rule_configs(&encoded).expect("round trip");
        assert_eq!(decoded, configs);
    }

    #[test]
    fn test_defaults_applied_on_optional_fields() {
        let raw = r#"[
            {
                "predicates": [{"type": "simpleObject"}],
                "summarizer": {"type": "joinedValues", "keys": ["a", "b"]}
            }
        ]"#;

        let configs = parse_rule_configs(raw).expect("valid descriptors");
        match &configs[0].predicates[0] {
            PredicateConfig::SimpleObject(config) => {
                assert!(config.keys_to_ignore.is_empty());
                assert_eq!(config.max_length, 30);
            }
            other => panic!("unexpected predicate: {:?}", other),
        }
        match &configs[0].summarizer {
            SummarizerConfig::JoinedValues(config) => assert_eq!(config.joiner, "-"),
            other => panic!("unexpected summarizer: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_discriminator_rejected() {
        let raw = r#"[
            {
                "predicates": [{"type": "alwaysTrue"}],
                "summarizer": {"type": "static", "value": "x"}
            }
        ]"#;

        assert!(parse_rule_configs(raw).is_err());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let raw = r#"[
            {
                "predicates": [{"type": "keysPresent"}],
                "summarizer": {"type": "static", "value": "x"}
            }
        ]"#;

        assert!(parse_rule_configs(raw).is_err());
    }

    #[test]
    fn test_non_array_document_rejected() {
        let err = parse_rule_configs(r#"{"predicates": []}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
