use crate::args::ConfigCommand;
use crate::commands::Context;
use anyhow::Result;
use jsonlens_runtime::Settings;

pub fn run(context: &Context, command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Init => {
            if context.settings_path.exists() {
                println!(
                    "Settings file already exists: {}",
                    context.settings_path.display()
                );
                return Ok(());
            }
            Settings::default().save_to(&context.settings_path)?;
            println!("Wrote {}", context.settings_path.display());
            Ok(())
        }
        ConfigCommand::Show => {
            print!("{}", toml::to_string_pretty(&context.settings)?);
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", context.settings_path.display());
            Ok(())
        }
    }
}
