mod args;
mod commands;
mod handlers;

pub use args::{Cli, ColorChoice, Commands, ConfigCommand, ViewArgs};
pub use commands::run;
