use super::{parse_document, read_input};
use crate::args::ViewArgs;
use crate::commands::Context;
use anyhow::{anyhow, Result};
use jsonlens_render::{first_complex_root_key, resolve_path, ColorMode, TreeRenderer};
use jsonlens_runtime::{assemble_with_extra, load_rules_file, Assembled, RejectedRule};
use owo_colors::OwoColorize;
use serde_json::Value;

pub fn run(context: &Context, args: &ViewArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let document = parse_document(&input)?;

    let assembled = assemble(context, args)?;
    report_rejected(&assembled.rejected, context.color);

    let mut flags = context.settings.view;
    if args.alphabetize_keys {
        flags.alphabetize_keys = true;
    }
    if args.hoist_id {
        flags.hoist_id_to_top = true;
    }

    let target = select_target(&document, args, &flags)?;
    let renderer = TreeRenderer::new(&assembled.rules, flags, args.depth, context.color);
    print!("{}", renderer.render(target));
    Ok(())
}

fn assemble(context: &Context, args: &ViewArgs) -> Result<Assembled> {
    let mut settings = context.settings.clone();
    if args.no_default_rules {
        settings.rules.use_defaults = false;
    }
    let extra = match &args.rules {
        Some(path) => load_rules_file(path)?,
        None => Vec::new(),
    };
    Ok(assemble_with_extra(&settings, &extra)?)
}

fn select_target<'a>(
    document: &'a Value,
    args: &ViewArgs,
    flags: &jsonlens_types::ViewFlags,
) -> Result<&'a Value> {
    if let Some(path) = &args.path {
        return resolve_path(document, path).ok_or_else(|| anyhow!("path not found: {}", path));
    }
    if flags.jump_to_complex_root_key
        && let Some(key) = first_complex_root_key(document, flags)
        && let Some(target) = document.get(key)
    {
        return Ok(target);
    }
    Ok(document)
}

/// Skipped custom rules are warnings, never fatal: the rest of the rule set
/// still renders the tree.
pub(crate) fn report_rejected(rejected: &[RejectedRule], color: ColorMode) {
    for rule in rejected {
        if color == ColorMode::Ansi {
            eprintln!(
                "{} custom rule {} skipped: {}",
                "warning:".yellow().bold(),
                rule.index + 1,
                rule.error
            );
        } else {
            eprintln!(
                "warning: custom rule {} skipped: {}",
                rule.index + 1,
                rule.error
            );
        }
    }
}
