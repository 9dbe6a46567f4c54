use std::path::{Path, PathBuf};

use anyhow::Context;
use pcset_core::Spelling;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub spelling: Spelling,
    pub log_level: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            spelling: Spelling::Sharp,
            log_level: "info".to_string(),
            json: false,
        }
    }
}

pub(crate) fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pcset")
        .join("config.toml")
}

pub(crate) fn parse_config(text: &str) -> anyhow::Result<AppConfig> {
    Ok(toml::from_str(text)?)
}

/// Load a config the user pointed at explicitly; any failure is an error
pub(crate) fn load_config_from(path: &Path) -> anyhow::Result<AppConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Invalid config {}", path.display()))
}

/// Load the config at the default location. A missing file yields defaults;
/// a malformed one yields defaults plus the parse error for the caller to report.
pub(crate) fn load_default_config() -> (AppConfig, Option<anyhow::Error>) {
    let path = config_path();
    let Ok(text) = std::fs::read_to_string(&path) else {
        return (AppConfig::default(), None);
    };
    match parse_config(&text) {
        Ok(config) => (config, None),
        Err(e) => (
            AppConfig::default(),
            Some(e.context(format!("Ignoring invalid config {}", path.display()))),
        ),
    }
}
