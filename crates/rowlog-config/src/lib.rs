//! # rowlog-config
//!
//! Configuration management for rowlog.
//!
//! Loads configuration from:
//! 1. `~/.rowlog/config.toml` (global)
//! 2. `.rowlog/config.toml` (project-local, overrides global)
//! 3. Environment variables (highest priority)

pub mod logging;
pub mod testing;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Data file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "data.csv";

/// Environment variable overriding `[data] file`.
pub const ENV_DATA_FILE: &str = "ROWLOG_FILE";

/// Project config location, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".rowlog/config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML render error: {0}")]
    Render(#[from] toml::ser::Error),
}

/// A loaded config plus the files it was read from, in load order
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub sources: Vec<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from standard locations
    pub fn load() -> Result<LoadedConfig, ConfigError> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(PROJECT_CONFIG_PATH),
            |key| std::env::var(key).ok(),
        )
    }

    /// Load config from explicit locations.
    ///
    /// `env` resolves environment variables; missing files are skipped.
    /// Runs before logging is set up, so callers log `sources` themselves.
    pub fn load_from(
        global_path: Option<&Path>,
        project_path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<LoadedConfig, ConfigError> {
        let mut config = Config::default();
        let mut sources = Vec::new();

        // 1. Global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                let contents = std::fs::read_to_string(global_path)?;
                config = toml::from_str(&contents)?;
                sources.push(global_path.to_path_buf());
            }
        }

        // 2. Project config - overrides global
        if project_path.exists() {
            let contents = std::fs::read_to_string(project_path)?;
            let project_config: Config = toml::from_str(&contents)?;
            config.merge(project_config);
            sources.push(project_path.to_path_buf());
        }

        // 3. Environment
        config.apply_env_overrides(env);

        Ok(LoadedConfig { config, sources })
    }

    /// Global config path: ~/.rowlog/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".rowlog/config.toml"))
    }

    /// Merge a project config over this one. Only non-default values win.
    fn merge(&mut self, other: Config) {
        let defaults = Config::default();
        if other.data.file != defaults.data.file {
            self.data.file = other.data.file;
        }
        if other.logging.level != defaults.logging.level {
            self.logging.level = other.logging.level;
        }
    }

    fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(path) = env(ENV_DATA_FILE).filter(|p| !p.is_empty()) {
            self.data.file = PathBuf::from(path);
        }
    }

    /// Render this config as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Data file configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// CSV file rows are appended to and read from
    pub file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter when neither ROWLOG_LOG nor RUST_LOG is set
    pub level: logging::LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: logging::LogLevel::Warn,
        }
    }
}
