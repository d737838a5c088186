use crate::args::{Cli, ColorChoice, Commands, ViewArgs};
use crate::handlers;
use anyhow::Result;
use is_terminal::IsTerminal;
use jsonlens_render::ColorMode;
use jsonlens_runtime::{resolve_settings_path, Settings};
use std::path::PathBuf;

/// Shared per-invocation context: resolved settings and output mode.
pub struct Context {
    pub settings: Settings,
    pub settings_path: PathBuf,
    pub color: ColorMode,
}

pub fn run(cli: Cli) -> Result<()> {
    let settings_path = resolve_settings_path(cli.config.as_deref())?;
    let settings = Settings::load_from(&settings_path)?;
    let color = match cli.color {
        ColorChoice::Always => ColorMode::Ansi,
        ColorChoice::Never => ColorMode::Plain,
        ColorChoice::Auto => {
            if std::io::stdout().is_terminal() {
                ColorMode::Ansi
            } else {
                ColorMode::Plain
            }
        }
    };
    let context = Context {
        settings,
        settings_path,
        color,
    };

    match cli.command {
        Some(Commands::View(args)) => handlers::view::run(&context, &args),
        Some(Commands::Find { query, file }) => handlers::find::run(&query, file.as_deref()),
        Some(Commands::Rules {
            no_default_rules,
            rules,
        }) => handlers::rules::run(&context, no_default_rules, rules.as_deref()),
        Some(Commands::Config { command }) => handlers::config::run(&context, &command),
        None => handlers::view::run(&context, &ViewArgs::default()),
    }
}
