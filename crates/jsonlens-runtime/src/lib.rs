pub mod assemble;
pub mod config;
pub mod error;

pub use assemble::{
    assemble, assemble_with_extra, effective_rule_configs, Assembled, RejectedRule,
};
pub use config::{load_rules_file, resolve_settings_path, RuleSettings, Settings};
pub use error::{Error, Result};
