use crate::commands::Context;
use anyhow::Result;
use jsonlens_runtime::{effective_rule_configs, load_rules_file};
use std::path::Path;

/// Print the effective descriptor list as pretty JSON - the same document a
/// user could paste back in as custom rules.
pub fn run(context: &Context, no_default_rules: bool, rules_file: Option<&Path>) -> Result<()> {
    let mut settings = context.settings.clone();
    if no_default_rules {
        settings.rules.use_defaults = false;
    }
    let extra = match rules_file {
        Some(path) => load_rules_file(path)?,
        None => Vec::new(),
    };

    let configs = effective_rule_configs(&settings, &extra);
    println!("{}", serde_json::to_string_pretty(&configs)?);
    Ok(())
}
