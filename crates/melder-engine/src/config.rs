//! Engine configuration.
//!
//! Provides storage location, write debouncing, default character, logging
//! and locale settings. Configuration can be loaded from and saved to a TOML
//! file.

use melder_common::{Character, CommandId};
use melder_gameplay::LocaleNames;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::debounce::{DEFAULT_DEBOUNCE_MS, MAX_DEBOUNCE_MS};

/// Configuration file name.
const CONFIG_FILE: &str = "melder.toml";

/// Application directory name under the platform config/data roots.
const APP_DIR: &str = "melder";

/// Locale file directory under the data directory.
const LOCALE_DIR: &str = "locales";

/// Errors that can occur when saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Engine configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory holding persisted snapshots (None = platform data directory)
    pub data_dir: Option<PathBuf>,
    /// Write coalescing window in milliseconds
    pub persist_debounce_ms: u64,
    /// Character selected when none was persisted
    pub default_character: Character,
    /// Default tracing directive
    pub log_filter: String,
    /// Locale code for display names
    pub locale: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            persist_debounce_ms: DEFAULT_DEBOUNCE_MS,
            default_character: Character::default(),
            log_filter: "melder=info".to_string(),
            locale: "en".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from the default file location.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Self {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read config file: {e}");
                return Self::default();
            },
        };

        match toml::from_str::<Self>(&contents) {
            Ok(mut config) => {
                config.validate();
                info!("Loaded config from {}", path.display());
                config
            },
            Err(e) => {
                warn!("Failed to parse config file: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to the default file location.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(Self::config_path())
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(CONFIG_FILE),
            |dir| dir.join(APP_DIR).join(CONFIG_FILE),
        )
    }

    /// Directory snapshots are stored in.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir().map_or_else(|| PathBuf::from(APP_DIR), |dir| dir.join(APP_DIR))
        })
    }

    /// Directory locale files are read from.
    pub fn locale_dir(&self) -> PathBuf {
        self.resolved_data_dir().join(LOCALE_DIR)
    }

    /// Name resolver for the configured locale.
    ///
    /// Loads `<locale>.json` from [`Self::locale_dir`] when present. A missing
    /// or unreadable file leaves the built-in English names in effect.
    pub fn locale_names(&self) -> LocaleNames {
        let mut names = LocaleNames::new(&self.locale);
        let path = self.locale_dir().join(format!("{}.json", self.locale));
        if !path.exists() {
            debug!("No locale file for '{}', using built-in names", self.locale);
            return names;
        }
        if let Err(e) = names.load_locale(&path) {
            warn!("Failed to load locale file {}: {e}", path.display());
        }
        names
    }

    /// Write coalescing window.
    #[must_use]
    pub const fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.persist_debounce_ms)
    }

    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.persist_debounce_ms = self.persist_debounce_ms.min(MAX_DEBOUNCE_MS);
        if self.log_filter.trim().is_empty() {
            self.log_filter = Self::default().log_filter;
        }
        if self.locale.trim().is_empty() {
            self.locale = Self::default().locale;
        }
    }
}
