// Engine module - the summarization rule core.
// This layer sits between raw rule descriptors (types) and tree presentation:
// it compiles descriptors into immutable rules and answers "what short label
// does this collapsed node get?" with a first-match-wins scan.

mod defaults;
mod error;
mod predicate;
mod rule;
mod summarizer;

pub use defaults::default_rule_configs;
pub use error::{Error, Result};
pub use predicate::Predicate;
pub use rule::{Rule, RuleSet};
pub use summarizer::Summarizer;
