//! Backend connection settings.
//!
//! Each field resolves independently: environment variable, then the
//! `[backend]` table of `~/.config/game-shelf/config.toml`, then the built-in
//! default. [`ConfigSources`] records where every value came from so the CLI
//! can explain the effective configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const URL_ENV: &str = "GAME_SHELF_URL";
pub const POLL_ENV: &str = "GAME_SHELF_POLL_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub poll_interval_ms: u64,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Where a config field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Given on the command line.
    CommandLine,
    /// Built-in default.
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::CommandLine => write!(f, "command line"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Provenance of each config field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSources {
    pub base_url: ConfigSource,
    pub poll_interval_ms: ConfigSource,
    pub timeout_secs: ConfigSource,
}

/// TOML config file format.
#[derive(Debug, Default, Deserialize, Serialize)]
struct ConfigFile {
    backend: Option<BackendSection>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct BackendSection {
    url: Option<String>,
    poll_interval_ms: Option<u64>,
    timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Resolve from the process environment and the default config file.
    pub fn load() -> Result<(Self, ConfigSources), ClientError> {
        let file = match config_path() {
            Some(path) => read_config_file(&path)?,
            None => None,
        };
        resolve(file.as_deref(), |var| std::env::var(var).ok())
    }

    /// Resolve using an explicit config file (which may not exist).
    pub fn load_from(path: &Path) -> Result<(Self, ConfigSources), ClientError> {
        let file = read_config_file(path)?;
        resolve(file.as_deref(), |var| std::env::var(var).ok())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Replace the backend URL, e.g. from a command-line flag.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self, ClientError> {
        let url = url.into();
        validate_url(&url)?;
        self.base_url = url;
        Ok(self)
    }
}

/// Merge env lookups over file values over defaults.
pub(crate) fn resolve(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(ClientConfig, ConfigSources), ClientError> {
    let section = match file {
        Some(text) => toml::from_str::<ConfigFile>(text)?.backend.unwrap_or_default(),
        None => BackendSection::default(),
    };

    let (base_url, base_url_src) = match env(URL_ENV).filter(|v| !v.trim().is_empty()) {
        Some(url) => (url, ConfigSource::EnvVar(URL_ENV)),
        None => match section.url {
            Some(url) => (url, ConfigSource::ConfigFile),
            None => (DEFAULT_BASE_URL.to_string(), ConfigSource::Default),
        },
    };
    validate_url(&base_url)?;

    let (poll_interval_ms, poll_src) = match env(POLL_ENV) {
        Some(raw) => {
            let ms = raw.trim().parse::<u64>().map_err(|_| {
                ClientError::config(format!("{POLL_ENV} must be a number of milliseconds, got {raw:?}"))
            })?;
            (ms, ConfigSource::EnvVar(POLL_ENV))
        }
        None => match section.poll_interval_ms {
            Some(ms) => (ms, ConfigSource::ConfigFile),
            None => (DEFAULT_POLL_INTERVAL_MS, ConfigSource::Default),
        },
    };
    if poll_interval_ms == 0 {
        return Err(ClientError::config("Poll interval must be greater than zero"));
    }

    let (timeout_secs, timeout_src) = match section.timeout_secs {
        Some(secs) => (secs, ConfigSource::ConfigFile),
        None => (DEFAULT_TIMEOUT_SECS, ConfigSource::Default),
    };
    if timeout_secs == 0 {
        return Err(ClientError::config("Request timeout must be greater than zero"));
    }

    Ok((
        ClientConfig {
            base_url,
            poll_interval_ms,
            timeout_secs,
        },
        ConfigSources {
            base_url: base_url_src,
            poll_interval_ms: poll_src,
            timeout_secs: timeout_src,
        },
    ))
}

pub(crate) fn validate_url(url: &str) -> Result<(), ClientError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ClientError::config(format!(
            "Backend URL must start with http:// or https://, got {url:?}"
        )))
    }
}

/// Return the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("game-shelf").join("config.toml"))
}

fn read_config_file(path: &Path) -> Result<Option<String>, ClientError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Save the config to the default config file. Returns the path written.
pub fn save_to_file(config: &ClientConfig) -> Result<PathBuf, ClientError> {
    let path = config_path()
        .ok_or_else(|| ClientError::config("Could not determine config directory"))?;
    save_to_path(config, &path)?;
    Ok(path)
}

/// Write `config` to `path` atomically (temp file + rename), creating parent
/// directories as needed.
pub fn save_to_path(config: &ClientConfig, path: &Path) -> Result<(), ClientError> {
    validate_url(&config.base_url)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = ConfigFile {
        backend: Some(BackendSection {
            url: Some(config.base_url.clone()),
            poll_interval_ms: Some(config.poll_interval_ms),
            timeout_secs: Some(config.timeout_secs),
        }),
    };
    let toml_str = toml::to_string_pretty(&file)
        .map_err(|e| ClientError::config(format!("Failed to serialize config: {}", e)))?;

    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, toml_str)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
