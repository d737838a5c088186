use crate::{Error, Result};
use jsonlens_types::{parse_rule_configs, RuleConfig, ViewFlags};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the settings file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. JSONLENS_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.jsonlens/config.toml (fallback for systems without XDG)
pub fn resolve_settings_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("JSONLENS_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("jsonlens").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".jsonlens").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine settings path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Persisted user settings: view toggles plus the rule sources to merge.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub view: ViewFlags,
    pub rules: RuleSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Append the built-in default rule table
    pub use_defaults: bool,

    /// Place custom rules before the defaults. First-match-wins evaluation
    /// makes this the "custom rules override defaults" position.
    pub custom_first: bool,

    /// Inline custom rule descriptors
    pub custom: Vec<RuleConfig>,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            use_defaults: true,
            custom_first: true,
            custom: Vec::new(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let path = resolve_settings_path(None)?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Load an ad-hoc custom rules file: a JSON array of rule descriptors, the
/// same document shape the settings store inline.
pub fn load_rules_file(path: &Path) -> Result<Vec<RuleConfig>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_rule_configs(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonlens_types::{PredicateConfig, SummarizerConfig};
    use tempfile::TempDir;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.rules.use_defaults);
        assert!(settings.rules.custom_first);
        assert!(settings.rules.custom.is_empty());
        assert!(!settings.view.alphabetize_keys);
    }

    #[test]
    fn test_settings_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.view.alphabetize_keys = true;
        settings.rules.use_defaults = false;
        settings.rules.custom = jsonlens_types::parse_rule_configs(
            r#"[
                {
                    "predicates": [{"type": "keysPresent", "keys": ["sku"]}],
                    "summarizer": {"type": "keyValue", "key": "sku"}
                }
            ]"#,
        )?;

        settings.save_to(&path)?;
        assert!(path.exists());

        let loaded = Settings::load_from(&path)?;
        assert!(loaded.view.alphabetize_keys);
        assert!(!loaded.rules.use_defaults);
        assert_eq!(loaded.rules.custom.len(), 1);
        assert!(matches!(
            loaded.rules.custom[0].predicates[0],
            PredicateConfig::KeysPresent(_)
        ));
        assert!(matches!(
            loaded.rules.custom[0].summarizer,
            SummarizerConfig::KeyValue(_)
        ));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nonexistent.toml");

        let settings = Settings::load_from(&path)?;
        assert!(settings.rules.use_defaults);

        Ok(())
    }

    #[test]
    fn test_load_rules_file_rejects_non_array() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("rules.json");
        std::fs::write(&path, r#"{"predicates": []}"#)?;

        assert!(load_rules_file(&path).is_err());

        Ok(())
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(expand_tilde("/etc/jsonlens.toml"), PathBuf::from("/etc/jsonlens.toml"));
    }
}
