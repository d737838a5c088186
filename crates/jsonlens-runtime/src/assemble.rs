use crate::config::Settings;
use crate::Result;
use jsonlens_engine::{default_rule_configs, Rule, RuleSet};
use jsonlens_types::RuleConfig;

/// A custom rule that failed to compile: its position in the custom list
/// (settings rules first, then ad-hoc rules) plus the compilation error.
#[derive(Debug)]
pub struct RejectedRule {
    pub index: usize,
    pub error: jsonlens_engine::Error,
}

/// Result of rule-set assembly. Rejected custom rules are reported, never
/// fatal: a misconfigured custom set must not take the defaults down with it.
#[derive(Debug)]
pub struct Assembled {
    pub rules: RuleSet,
    pub rejected: Vec<RejectedRule>,
}

/// Assemble the session rule set from settings alone.
pub fn assemble(settings: &Settings) -> Result<Assembled> {
    assemble_with_extra(settings, &[])
}

/// Assemble the session rule set from settings plus ad-hoc custom rules
/// (e.g. a --rules file).
///
/// Custom rules compile individually under a skip-and-warn policy; the
/// built-in defaults compile fail-fast because a failure there is a bug, not
/// user input. Merge order follows `custom_first` - with first-match-wins
/// evaluation, whichever source comes first wins overlaps.
pub fn assemble_with_extra(settings: &Settings, extra: &[RuleConfig]) -> Result<Assembled> {
    let mut custom = Vec::new();
    let mut rejected = Vec::new();
    for (index, config) in settings.rules.custom.iter().chain(extra).enumerate() {
        match Rule::compile(config) {
            Ok(rule) => custom.push(rule),
            Err(error) => rejected.push(RejectedRule { index, error }),
        }
    }

    let defaults: Vec<Rule> = if settings.rules.use_defaults {
        default_rule_configs()
            .iter()
            .map(Rule::compile)
            .collect::<jsonlens_engine::Result<_>>()?
    } else {
        Vec::new()
    };

    let mut ordered = Vec::with_capacity(custom.len() + defaults.len());
    if settings.rules.custom_first {
        ordered.extend(custom);
        ordered.extend(defaults);
    } else {
        ordered.extend(defaults);
        ordered.extend(custom);
    }

    Ok(Assembled {
        rules: RuleSet::new(ordered),
        rejected,
    })
}

/// The effective descriptor list in evaluation order, for display. Mirrors
/// the merge in [`assemble_with_extra`] without compiling anything.
pub fn effective_rule_configs(settings: &Settings, extra: &[RuleConfig]) -> Vec<RuleConfig> {
    let custom = settings.rules.custom.iter().chain(extra).cloned();
    let defaults = if settings.rules.use_defaults {
        default_rule_configs()
    } else {
        Vec::new()
    };

    if settings.rules.custom_first {
        custom.chain(defaults).collect()
    } else {
        defaults.into_iter().chain(custom).collect()
    }
}
