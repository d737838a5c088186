use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jsonlens")]
#[command(about = "Re-render raw JSON as a collapsible tree with rule-driven summaries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a JSON document as a summarized tree (the default)
    View(ViewArgs),

    /// Search keys and values, printing matching breadcrumb paths
    Find {
        query: String,

        /// JSON file to search (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print the effective rule descriptors as JSON, in evaluation order
    Rules {
        #[arg(long)]
        no_default_rules: bool,

        /// Extra custom rules file (a JSON array of descriptors)
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args)]
pub struct ViewArgs {
    /// JSON file to render (stdin when omitted)
    pub file: Option<PathBuf>,

    /// How many levels to expand before collapsing
    #[arg(long, default_value_t = 2)]
    pub depth: usize,

    /// Breadcrumb path to render instead of the document root (e.g. ".data.[0]")
    #[arg(long)]
    pub path: Option<String>,

    /// Extra custom rules file (a JSON array of descriptors)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Drop the built-in default rule table for this run
    #[arg(long)]
    pub no_default_rules: bool,

    /// Sort object keys before rendering
    #[arg(long)]
    pub alphabetize_keys: bool,

    /// Move an `id` key to the front of its object
    #[arg(long)]
    pub hoist_id: bool,
}

impl Default for ViewArgs {
    fn default() -> Self {
        Self {
            file: None,
            depth: 2,
            path: None,
            rules: None,
            no_default_rules: false,
            alphabetize_keys: false,
            hoist_id: false,
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a default settings file if none exists
    Init,

    /// Print the active settings as TOML
    Show,

    /// Print the settings file location
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}
