use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Config {
    #[serde(default = "default_data_path")]
    pub(crate) data_path: PathBuf,
    #[serde(default)]
    pub(crate) default_category: Option<String>,
    #[serde(default = "default_log_level")]
    pub(crate) log_level: String,
    #[serde(default)]
    pub(crate) display: DisplayConfig,
}

impl Config {
    pub(crate) fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// A missing config file means defaults; an unreadable one is an error.
    /// Runs before logging is up, so the caller logs the returned source.
    pub(crate) fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<(Self, ConfigSource)> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults));
        }
        Ok((Self::load(path)?, ConfigSource::File))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ConfigSource {
    File,
    Defaults,
}

impl ConfigSource {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ConfigSource::File => "file",
            ConfigSource::Defaults => "defaults",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            default_category: None,
            log_level: default_log_level(),
            display: DisplayConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DisplayConfig {
    #[serde(default = "default_scroll_step")]
    pub(crate) scroll_step: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scroll_step: default_scroll_step(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("risk-measures.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_scroll_step() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").expect("config");
        assert_eq!(config.data_path, PathBuf::from("risk-measures.json"));
        assert_eq!(config.default_category, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.display.scroll_step, 1);
    }

    #[test]
    fn parses_all_fields() {
        let config: Config = toml::from_str(
            r#"
data_path = "data/risk-measures.json"
default_category = "Governance"
log_level = "debug"

[display]
scroll_step = 3
"#,
        )
        .expect("config");
        assert_eq!(config.data_path, PathBuf::from("data/risk-measures.json"));
        assert_eq!(config.default_category.as_deref(), Some("Governance"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.display.scroll_step, 3);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let (config, source) =
            Config::load_or_default("does/not/exist/explorer.toml").expect("config");
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.data_path, PathBuf::from("risk-measures.json"));
    }

    #[test]
    fn existing_file_reports_file_source() {
        let dir = std::env::temp_dir().join(format!("risk-explorer-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("explorer.toml");
        std::fs::write(&path, "default_category = \"Deployment\"\n").expect("write");

        let (config, source) = Config::load_or_default(&path).expect("config");
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.default_category.as_deref(), Some("Deployment"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
