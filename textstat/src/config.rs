//! Configuration loaded from `~/.config/textstat/config.toml`.
//!
//! Every setting is optional and command-line flags take precedence. A
//! missing file is the same as an empty one; a broken file falls back to
//! defaults with a warning instead of stopping the program.
//!
//! ```toml
//! [counting]
//! empty_input = "single-token"
//!
//! [output]
//! format = "json"
//! by_file = true
//! sort = "words"
//!
//! [filter]
//! include = ["**/*.md"]
//! exclude = ["**/drafts/**"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use textstatlib::EmptyInput;

use crate::render::OutputFormat;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "TEXTSTAT_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub counting: CountingConfig,
    pub output: OutputConfig,
    pub filter: FilterSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CountingConfig {
    pub empty_input: EmptyInput,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub by_file: bool,
    /// One of `path`, `words`, `letters`, `chars`
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterSection {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Result of loading configuration
///
/// Problems are reported through `warning` for the caller to print once.
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from `$TEXTSTAT_CONFIG` or `~/.config/textstat/config.toml`.
pub fn load_config() -> ConfigResult {
    load_config_from(&config_path())
}

/// Loads configuration from an explicit path.
pub fn load_config_from(path: &Path) -> ConfigResult {
    debug!("Loading config from {:?}", path);

    if !path.exists() {
        debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!("Failed to read config file {:?}: {}", path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            debug!("Failed to parse config file {:?}: {}", path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file.
///
/// Uses `~/.config/textstat/config.toml` on all platforms unless
/// `TEXTSTAT_CONFIG` is set.
fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("textstat")
        .join("config.toml")
}
