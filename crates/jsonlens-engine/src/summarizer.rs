use crate::error::Result;
use jsonlens_types::{coerce_to_string, SummarizerConfig};
use serde_json::{Map, Value};

/// Produces the short display string for a node that already matched a rule.
///
/// `summarize` is defensive: it is only invoked after the owning rule's
/// predicates passed, but a missing key still degrades to `None` (or an empty
/// join) instead of erroring.
#[derive(Debug, Clone)]
pub enum Summarizer {
    /// Fixed label, input ignored
    Static { value: String },

    /// String coercion of `value[key]`
    KeyValue { key: String },

    /// Coercions of the present keys, joined; absent keys are skipped
    /// entirely rather than leaving empty placeholders.
    JoinedValues { keys: Vec<String>, joiner: String },

    /// `value[amount_key]` as a grouped 2-decimal amount, currency-aware
    FinancialAmount {
        amount_key: String,
        currency_key: String,
    },

    /// `key:value` for the single interesting key of a simple object
    SimpleObject { keys_to_ignore: Vec<String> },
}

impl Summarizer {
    pub fn compile(config: &SummarizerConfig) -> Result<Self> {
        match config {
            SummarizerConfig::Static(c) => Ok(Self::Static {
                value: c.value.clone(),
            }),
            SummarizerConfig::KeyValue(c) => Ok(Self::KeyValue { key: c.key.clone() }),
            SummarizerConfig::JoinedValues(c) => Ok(Self::JoinedValues {
                keys: c.keys.clone(),
                joiner: c.joiner.clone(),
            }),
            SummarizerConfig::FinancialAmount(c) => Ok(Self::FinancialAmount {
                amount_key: c.amount_key.clone(),
                currency_key: c.currency_key.clone(),
            }),
            SummarizerConfig::SimpleObject(c) => Ok(Self::SimpleObject {
                keys_to_ignore: c.keys_to_ignore.clone(),
            }),
        }
    }

    pub fn summarize(&self, value: &Value) -> Option<String> {
        match self {
            Self::Static { value: label } => Some(label.clone()),
            Self::KeyValue { key } => value.get(key).map(coerce_to_string),
            Self::JoinedValues { keys, joiner } => {
                let parts: Vec<String> = keys
                    .iter()
                    .filter_map(|key| value.get(key))
                    .map(coerce_to_string)
                    .collect();
                Some(parts.join(joiner))
            }
            Self::FinancialAmount {
                amount_key,
                currency_key,
            } => {
                let amount = format_amount(value.get(amount_key)?);
                let currency = coerce_to_string(value.get(currency_key)?).to_uppercase();
                Some(match currency.as_str() {
                    "USD" => format!("${}", amount),
                    "EUR" => format!("€{}", amount),
                    _ => format!("{} {}", amount, currency),
                })
            }
            Self::SimpleObject { keys_to_ignore } => {
                simple_object_text(value.as_object()?, keys_to_ignore)
            }
        }
    }
}

/// Format an amount with exactly two fraction digits and a `,` group
/// separator every three integer digits, sign leading the digits.
///
/// A non-numeric amount is a configuration smell, not an input error: fail
/// loudly in debug builds, render "NaN" in release.
fn format_amount(amount: &Value) -> String {
    let Some(number) = amount.as_f64() else {
        debug_assert!(false, "financialAmount applied to non-numeric amount");
        return "NaN".to_string();
    };
    let fixed = format!("{:.2}", number.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };
    let digits = integer.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + 4);
    if number < 0.0 {
        grouped.push('-');
    }
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (digits - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}

/// Pick the label key of a simple object: a non-ignored key always replaces
/// the current candidate, an ignored key is only taken while nothing has been
/// picked yet. The effective winner is the *last* non-ignored key in
/// iteration order; callers depend on this exact tie-break.
pub(crate) fn simple_object_text(
    object: &Map<String, Value>,
    keys_to_ignore: &[String],
) -> Option<String> {
    let mut chosen: Option<(&String, &Value)> = None;
    for (key, field) in object {
        if !keys_to_ignore.contains(key) || chosen.is_none() {
            chosen = Some((key, field));
        }
    }
    chosen.map(|(key, field)| format!("{}:{}", key, coerce_to_string(field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonlens_types::{
        FinancialAmountConfig, JoinedValuesConfig, KeyValueConfig, SimpleSummaryConfig,
        StaticConfig,
    };
    use serde_json::json;

    fn financial(amount_key: &str, currency_key: &str) -> Summarizer {
        Summarizer::compile(&SummarizerConfig::FinancialAmount(FinancialAmountConfig {
            amount_key: amount_key.to_string(),
            currency_key: currency_key.to_string(),
        }))
        .expect("valid summarizer")
    }

    fn joined(keys: &[&str], joiner: &str) -> Summarizer {
        Summarizer::compile(&SummarizerConfig::JoinedValues(JoinedValuesConfig {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            joiner: joiner.to_string(),
        }))
        .expect("valid summarizer")
    }

    fn simple(ignore: &[&str]) -> Summarizer {
        Summarizer::compile(&SummarizerConfig::SimpleObject(SimpleSummaryConfig {
            keys_to_ignore: ignore.iter().map(|k| k.to_string()).collect(),
        }))
        .expect("valid summarizer")
    }

    #[test]
    fn test_static_ignores_input() {
        let summarizer = Summarizer::compile(&SummarizerConfig::Static(StaticConfig {
            value: "payment".to_string(),
        }))
        .expect("valid summarizer");
        assert_eq!(
            summarizer.summarize(&json!({"anything": 1})),
            Some("payment".to_string())
        );
    }

    #[test]
    fn test_key_value_coercion_and_absence() {
        let summarizer = Summarizer::compile(&SummarizerConfig::KeyValue(KeyValueConfig {
            key: "code".to_string(),
        }))
        .expect("valid summarizer");
        assert_eq!(
            summarizer.summarize(&json!({"code": "X1"})),
            Some("X1".to_string())
        );
        assert_eq!(
            summarizer.summarize(&json!({"code": 7})),
            Some("7".to_string())
        );
        assert_eq!(summarizer.summarize(&json!({"other": 1})), None);
    }

    #[test]
    fn test_joined_values_skips_absent_keys() {
        let summarizer = joined(&["a", "b"], "-");
        assert_eq!(
            summarizer.summarize(&json!({"a": "x", "b": "y"})),
            Some("x-y".to_string())
        );
        assert_eq!(
            summarizer.summarize(&json!({"a": "x"})),
            Some("x".to_string())
        );
        assert_eq!(summarizer.summarize(&json!({})), Some("".to_string()));
    }

    #[test]
    fn test_joined_values_custom_joiner() {
        let summarizer = joined(&["numberOfUnits", "timeUnit"], " ");
        assert_eq!(
            summarizer.summarize(&json!({"numberOfUnits": 3, "timeUnit": "month"})),
            Some("3 month".to_string())
        );
    }

    #[test]
    fn test_financial_amount_formatting() {
        let summarizer = financial("amount", "currency");
        assert_eq!(
            summarizer.summarize(&json!({"amount": 1234.5, "currency": "USD"})),
            Some("$1,234.50".to_string())
        );
        assert_eq!(
            summarizer.summarize(&json!({"amount": 9, "currency": "GBP"})),
            Some("9.00 GBP".to_string())
        );
        assert_eq!(
            summarizer.summarize(&json!({"amount": 1000000, "currency": "eur"})),
            Some("€1,000,000.00".to_string())
        );
    }

    #[test]
    fn test_financial_amount_negative_sign_follows_glyph() {
        let summarizer = financial("amount", "currency");
        assert_eq!(
            summarizer.summarize(&json!({"amount": -1234.5, "currency": "USD"})),
            Some("$-1,234.50".to_string())
        );
    }

    #[test]
    fn test_financial_amount_missing_currency_is_no_summary() {
        let summarizer = financial("amount", "currency");
        assert_eq!(summarizer.summarize(&json!({"amount": 5})), None);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_financial_amount_non_numeric_renders_nan() {
        let summarizer = financial("amount", "currency");
        assert_eq!(
            summarizer.summarize(&json!({"amount": "oops", "currency": "USD"})),
            Some("$NaN".to_string())
        );
    }

    #[test]
    fn test_simple_object_last_non_ignored_key_wins() {
        let summarizer = simple(&["apiType"]);
        assert_eq!(
            summarizer.summarize(&json!({"apiType": "x", "status": "done"})),
            Some("status:done".to_string())
        );
        // last-wins when several keys survive the ignore list
        assert_eq!(
            summarizer.summarize(&json!({"first": 1, "second": 2})),
            Some("second:2".to_string())
        );
        // an ignored key is only the fallback when nothing else exists
        assert_eq!(
            summarizer.summarize(&json!({"apiType": "x"})),
            Some("apiType:x".to_string())
        );
    }

    #[test]
    fn test_simple_object_empty_or_non_object() {
        let summarizer = simple(&[]);
        assert_eq!(summarizer.summarize(&json!({})), None);
        assert_eq!(summarizer.summarize(&json!([1, 2])), None);
    }
}
