use crate::error::{Error, Result};
use crate::predicate::Predicate;
use crate::summarizer::Summarizer;
use jsonlens_types::RuleConfig;
use serde_json::Value;

/// One summarization rule: every predicate must pass (logical AND) before the
/// summarizer runs.
#[derive(Debug, Clone)]
pub struct Rule {
    predicates: Vec<Predicate>,
    summarizer: Summarizer,
}

impl Rule {
    /// A rule with no predicates would shadow everything below it; reject it
    /// at construction.
    pub fn new(predicates: Vec<Predicate>, summarizer: Summarizer) -> Result<Self> {
        if predicates.is_empty() {
            return Err(Error::Config(
                "a rule requires at least one predicate".to_string(),
            ));
        }
        Ok(Self {
            predicates,
            summarizer,
        })
    }

    pub fn compile(config: &RuleConfig) -> Result<Self> {
        let predicates = config
            .predicates
            .iter()
            .map(Predicate::compile)
            .collect::<Result<Vec<_>>>()?;
        let summarizer = Summarizer::compile(&config.summarizer)?;
        Self::new(predicates, summarizer)
    }

    /// AND over the predicate list, short-circuiting on the first false.
    pub fn matches(&self, value: &Value) -> bool {
        self.predicates.iter().all(|predicate| predicate.test(value))
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }
}

/// An ordered rule list. Evaluation is a first-match-wins linear scan: rule
/// order IS behavior, and the default table depends on type-specific rules
/// preceding the catch-alls. There is no "most specific match" notion.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Compile descriptors in order, failing fast on the first invalid rule.
    /// Callers that prefer skip-and-warn compile rule by rule instead.
    pub fn compile(configs: &[RuleConfig]) -> Result<Self> {
        let rules = configs
            .iter()
            .map(Rule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule whose full predicate list passes. `None` means the caller
    /// shows only the structural hint next to the collapse indicator.
    pub fn first_match(&self, value: &Value) -> Option<&Summarizer> {
        self.rules
            .iter()
            .find(|rule| rule.matches(value))
            .map(Rule::summarizer)
    }

    /// Match and summarize in one step, the call renderers make per node.
    pub fn summarize(&self, value: &Value) -> Option<String> {
        self.first_match(value)
            .and_then(|summarizer| summarizer.summarize(value))
    }
}
