//! Built-in summarization rules.
//!
//! The table is ordered most-specific-first: rules keyed on the `apiType`
//! discriminator come before the status/id catch-alls, and the trailing
//! `simpleObject` rule must stay last. First-match-wins evaluation makes this
//! ordering load-bearing; reordering changes behavior for values that match
//! more than one rule.

use jsonlens_types::{
    FinancialAmountConfig, JoinedValuesConfig, KeyValueConfig, KeysConfig, PredicateConfig,
    RuleConfig, SimpleObjectConfig, SimpleSummaryConfig, SummarizerConfig, ValueRegexConfig,
};

/// The default rule table as raw descriptors, ready to compile into a
/// [`RuleSet`](crate::RuleSet) or to merge with user-supplied rules.
pub fn default_rule_configs() -> Vec<RuleConfig> {
    vec![
        // typed action/invoice items show their code
        RuleConfig {
            predicates: vec![
                keys_present(&["apiType", "code"]),
                value_regex("apiType", "action|invoiceItem"),
            ],
            summarizer: key_value("code"),
        },
        // adjustments show reference and status
        RuleConfig {
            predicates: vec![
                keys_present(&["apiType", "reference"]),
                value_regex("apiType", "(flat|percent)?[Aa]djustment(Rate)?"),
            ],
            summarizer: joined_values(&["reference", "status"], "-"),
        },
        RuleConfig {
            predicates: vec![keys_present(&["paymentMethodType"])],
            summarizer: key_value("paymentMethodType"),
        },
        RuleConfig {
            predicates: vec![
                keys_present(&["apiType", "role", "id"]),
                value_regex("apiType", "[Pp]arty"),
            ],
            summarizer: joined_values(&["role", "id"], "-"),
        },
        RuleConfig {
            predicates: vec![
                keys_present(&["apiType", "numberOfUnits", "timeUnit"]),
                value_regex("apiType", "[Pp]eriod"),
            ],
            summarizer: joined_values(&["numberOfUnits", "timeUnit"], " "),
        },
        RuleConfig {
            predicates: vec![
                keys_present(&["apiType", "sourceId", "sourceType"]),
                value_regex("apiType", "[Aa]nchor"),
            ],
            summarizer: joined_values(&["sourceType", "sourceId"], "-"),
        },
        RuleConfig {
            predicates: vec![
                keys_present(&["apiType", "type", "status"]),
                value_regex("apiType", "[Rr]eview"),
            ],
            summarizer: joined_values(&["type", "status"], "-"),
        },
        RuleConfig {
            predicates: vec![
                keys_present(&["apiType", "amount", "currency"]),
                value_regex("apiType", "[Ff]inancial"),
            ],
            summarizer: SummarizerConfig::FinancialAmount(FinancialAmountConfig {
                amount_key: "amount".to_string(),
                currency_key: "currency".to_string(),
            }),
        },
        // catch-all: any short single-key object, ignoring the discriminator
        RuleConfig {
            predicates: vec![PredicateConfig::SimpleObject(SimpleObjectConfig {
                keys_to_ignore: vec!["apiType".to_string()],
                ..SimpleObjectConfig::default()
            })],
            summarizer: SummarizerConfig::SimpleObject(SimpleSummaryConfig {
                keys_to_ignore: vec!["apiType".to_string()],
            }),
        },
    ]
}

fn keys_present(keys: &[&str]) -> PredicateConfig {
    PredicateConfig::KeysPresent(KeysConfig {
        keys: keys.iter().map(|k| k.to_string()).collect(),
    })
}

fn value_regex(key: &str, regex: &str) -> PredicateConfig {
    PredicateConfig::ValueRegex(ValueRegexConfig {
        key: key.to_string(),
        regex: regex.to_string(),
    })
}

fn key_value(key: &str) -> SummarizerConfig {
    SummarizerConfig::KeyValue(KeyValueConfig {
        key: key.to_string(),
    })
}

fn joined_values(keys: &[&str], joiner: &str) -> SummarizerConfig {
    SummarizerConfig::JoinedValues(JoinedValuesConfig {
        keys: keys.iter().map(|k| k.to_string()).collect(),
        joiner: joiner.to_string(),
    })
}
