//! Optional TOML configuration.
//!
//! The file lives in the platform config folder unless `--config` points
//! elsewhere:
//! - Linux: ~/.config/roster/roster.toml
//! - macOS: ~/Library/Application Support/org.fejeb.roster/roster.toml
//! - Windows: %APPDATA%/fejeb/roster/config/roster.toml

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use roster_directory::DEFAULT_WHATSAPP_GREETING;
use roster_ingest::{DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "fejeb";
const APP_NAME: &str = "roster";
const CONFIG_FILENAME: &str = "roster.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Published CSV export of the member sheet.
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Message prefilled in WhatsApp links; empty to send none.
    pub whatsapp_greeting: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_greeting: DEFAULT_WHATSAPP_GREETING.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub source: SourceConfig,
    pub contact: ContactConfig,
}

impl RosterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_secs)
    }
}

/// Default location of the config file, if the platform has one.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

pub fn parse_config(content: &str) -> Result<RosterConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Loads the config from `path`, or defaults when it is missing or invalid.
pub fn load_config_from(path: &Path) -> RosterConfig {
    match fs::read_to_string(path) {
        Ok(content) => match parse_config(&content) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file {:?}: {}, using defaults", path, e);
                RosterConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {:?}, using defaults", path);
            RosterConfig::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read config file {:?}: {}, using defaults", path, e);
            RosterConfig::default()
        }
    }
}

/// Loads `explicit` when given, otherwise the default config file.
pub fn load_config(explicit: Option<&Path>) -> RosterConfig {
    if let Some(path) = explicit {
        if !path.exists() {
            tracing::warn!("Config file {:?} does not exist, using defaults", path);
        }
        return load_config_from(path);
    }
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::warn!("Could not determine config path, using defaults");
            RosterConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = parse_config("[source]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.contact, ContactConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_config("").unwrap(), RosterConfig::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = RosterConfig::default();
        config.contact.whatsapp_greeting = String::new();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}
