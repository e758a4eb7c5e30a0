//! Application configuration management utilities.

use crate::errors::CliError;
use camino::Utf8PathBuf;
use ltk_game_data::install::is_valid_install;
use ltk_game_data::GameDataConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;

/// Application-wide configuration stored in config.toml.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// League of Legends install root.
    pub league_path: Option<Utf8PathBuf>,
    /// Root of the extracted manifest and images.
    pub output_dir: Option<Utf8PathBuf>,
    /// Directory for batch failure logs.
    pub log_dir: Option<Utf8PathBuf>,
    /// Locale to extract, e.g. `zh_cn`.
    pub region: Option<String>,
}

/// Returns the directory where the current executable resides.
pub fn install_dir() -> Option<Utf8PathBuf> {
    let exe = env::current_exe().ok()?;
    let parent = exe.parent()?;
    Utf8PathBuf::from_path_buf(parent.to_path_buf()).ok()
}

/// Returns the default configuration file path (config.toml next to the executable).
pub fn default_config_path() -> Option<Utf8PathBuf> {
    install_dir().map(|dir| dir.join("config.toml"))
}

/// Parse a config document, falling back to defaults on malformed content.
pub fn parse_config(content: &str) -> AppConfig {
    match toml::from_str(content) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Ignoring malformed config.toml: {}", e);
            AppConfig::default()
        }
    }
}

/// Loads the application configuration from config.toml.
/// Returns default configuration if file doesn't exist or cannot be parsed.
pub fn load_config() -> AppConfig {
    default_config_path()
        .and_then(|path| fs::read_to_string(path.as_std_path()).ok())
        .map(|content| parse_config(&content))
        .unwrap_or_default()
}

/// Saves the application configuration to config.toml.
pub fn save_config(cfg: &AppConfig) -> io::Result<Utf8PathBuf> {
    let path = default_config_path().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not determine config path")
    })?;
    let content = toml::to_string_pretty(cfg).map_err(io::Error::other)?;
    fs::write(path.as_std_path(), content)?;
    Ok(path)
}

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "manifest";

/// Values given on the command line. They win over config.toml.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub league_path: Option<Utf8PathBuf>,
    pub output_dir: Option<Utf8PathBuf>,
    pub log_dir: Option<Utf8PathBuf>,
    pub region: Option<String>,
}

/// Merge command-line overrides, config.toml and auto-detection into a library config.
///
/// The install path falls back to `detect` and is left empty when nothing is found;
/// commands that need the client call [`require_install`].
pub fn resolve_game_data_config(
    cfg: &AppConfig,
    overrides: Overrides,
    detect: impl FnOnce() -> Option<Utf8PathBuf>,
) -> GameDataConfig {
    let install_path = overrides
        .league_path
        .or_else(|| cfg.league_path.clone())
        .or_else(detect)
        .unwrap_or_default();
    let output_dir = overrides
        .output_dir
        .or_else(|| cfg.output_dir.clone())
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_DIR));

    let mut config = GameDataConfig::new(install_path, output_dir);
    if let Some(log_dir) = overrides.log_dir.or_else(|| cfg.log_dir.clone()) {
        config = config.with_log_path(log_dir);
    }
    // Regions name output folders, so every source is lowercased the same way.
    if let Some(region) = overrides.region.or_else(|| cfg.region.clone()) {
        config = config.with_region(region.to_lowercase());
    }
    config
}

pub fn require_install(config: &GameDataConfig) -> Result<(), CliError> {
    if config.install_path.as_str().is_empty() {
        return Err(CliError::LeaguePathNotSet);
    }
    if !is_valid_install(&config.install_path) {
        return Err(CliError::InvalidLeaguePath {
            path: config.install_path.clone(),
        });
    }
    Ok(())
}
