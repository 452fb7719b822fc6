//! Layered configuration.
//!
//! Settings resolve from three layers, later ones winning:
//! - built-in defaults
//! - `.symdex/settings.toml` in the working directory
//! - `SYMDEX_`-prefixed environment variables, with double underscores
//!   separating nested levels (`SYMDEX_SEARCH__MAX_RESULTS=100` sets
//!   `search.max_results`)

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{IndexError, IndexResult};
use crate::index::MatchMode;

pub const CONFIG_DIR: &str = ".symdex";
pub const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory holding the persisted index
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,

    /// Global debug mode
    #[serde(default)]
    pub debug: bool,

    /// Query behavior
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging levels
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchConfig {
    /// Match policy used when the CLI is not given `--mode`
    #[serde(default)]
    pub default_mode: MatchMode,

    /// Cap on items printed per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default level filter (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `parsing = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_version() -> u32 {
    1
}
fn default_index_path() -> PathBuf {
    PathBuf::from(".symdex/index")
}
fn default_max_results() -> usize {
    50
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            index_path: default_index_path(),
            debug: false,
            search: SearchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_mode: MatchMode::default(),
            max_results: default_max_results(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Resolve settings from all layers.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(Self::config_path()))
            .merge(Env::prefixed("SYMDEX_").split("__"))
            .extract()
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Warn when running outside an initialized directory.
    pub fn check_init() -> Result<(), String> {
        if Self::config_path().exists() {
            Ok(())
        } else {
            Err(format!(
                "No configuration found at {}. Run `symdex init` to create one.",
                Self::config_path().display()
            ))
        }
    }

    /// Write a starter configuration file.
    pub fn init_config_file(force: bool) -> IndexResult<PathBuf> {
        let path = Self::config_path();
        if path.exists() && !force {
            return Err(IndexError::General(format!(
                "Configuration file already exists at: {}",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| IndexError::FileWrite {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let toml_str = toml::to_string_pretty(&Settings::default())
            .map_err(|e| IndexError::General(format!("Failed to serialize settings: {e}")))?;
        fs::write(&path, toml_str).map_err(|e| IndexError::FileWrite {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.index_path, PathBuf::from(".symdex/index"));
        assert_eq!(settings.search.default_mode, MatchMode::Prefix);
        assert_eq!(settings.search.max_results, 50);
        assert_eq!(settings.logging.default, "warn");
    }

    #[test]
    fn settings_survive_toml_round_trip() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let back: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.search.max_results, settings.search.max_results);
        assert_eq!(back.search.default_mode, settings.search.default_mode);
    }
}
