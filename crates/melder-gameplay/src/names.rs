//! Display names for commands and abilities.
//!
//! Search matches against whatever names the resolver returns, so a
//! localized resolver makes the query language-aware.

use melder_common::{AbilityId, CommandId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading locale tables
#[derive(Debug, Error)]
pub enum LocaleError {
    /// I/O error reading locale file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing locale file
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Locale not loaded
    #[error("Locale not found: {0}")]
    LocaleNotFound(String),
}

/// Translates identifiers into display strings.
pub trait NameResolver {
    /// Display name of a command.
    fn command_name(&self, id: CommandId) -> &str;

    /// Display name of an ability.
    fn ability_name(&self, id: AbilityId) -> &str;
}

/// Built-in English names.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinNames;

impl NameResolver for BuiltinNames {
    fn command_name(&self, id: CommandId) -> &str {
        id.display_name()
    }

    fn ability_name(&self, id: AbilityId) -> &str {
        id.display_name()
    }
}

/// A locale file containing translations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleFile {
    /// Locale code (e.g., "en", "ja")
    pub locale: String,
    /// Human-readable locale name
    pub name: String,
    /// Translation strings: `commands.<Key>` / `abilities.<Key>` -> value
    pub strings: HashMap<String, String>,
}

/// Names loaded from locale files, with a fallback locale.
///
/// Lookup order: current locale, fallback locale, built-in English.
#[derive(Debug, Clone)]
pub struct LocaleNames {
    current_locale: String,
    fallback_locale: String,
    strings: HashMap<String, HashMap<String, String>>,
    locale_names: HashMap<String, String>,
}

impl Default for LocaleNames {
    fn default() -> Self {
        Self::new("en")
    }
}

impl LocaleNames {
    /// Creates a resolver with no tables loaded.
    pub fn new(default_locale: &str) -> Self {
        Self {
            current_locale: default_locale.to_string(),
            fallback_locale: default_locale.to_string(),
            strings: HashMap::new(),
            locale_names: HashMap::new(),
        }
    }

    /// Loads a locale from a JSON file.
    pub fn load_locale(&mut self, path: impl AsRef<Path>) -> Result<(), LocaleError> {
        let data = std::fs::read_to_string(path)?;
        self.load_locale_from_str(&data)
    }

    /// Loads a locale from a JSON string.
    pub fn load_locale_from_str(&mut self, data: &str) -> Result<(), LocaleError> {
        let locale_file: LocaleFile =
            serde_json::from_str(data).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        info!(
            "Loaded locale '{}' with {} strings",
            locale_file.locale,
            locale_file.strings.len()
        );
        self.locale_names
            .insert(locale_file.locale.clone(), locale_file.name);
        self.strings.insert(locale_file.locale, locale_file.strings);
        Ok(())
    }

    /// Switches the current locale. The locale must be loaded.
    pub fn set_locale(&mut self, locale: &str) -> Result<(), LocaleError> {
        if !self.strings.contains_key(locale) {
            return Err(LocaleError::LocaleNotFound(locale.to_string()));
        }
        debug!("Locale set to '{locale}'");
        self.current_locale = locale.to_string();
        Ok(())
    }

    /// Current locale code.
    pub fn locale(&self) -> &str {
        &self.current_locale
    }

    /// Sets the fallback locale.
    pub fn set_fallback(&mut self, locale: &str) {
        self.fallback_locale = locale.to_string();
    }

    /// Human-readable name of a loaded locale.
    pub fn locale_name(&self, locale: &str) -> Option<&str> {
        self.locale_names.get(locale).map(String::as_str)
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        [&self.current_locale, &self.fallback_locale]
            .into_iter()
            .filter_map(|locale| self.strings.get(locale))
            .find_map(|strings| strings.get(key))
            .map(String::as_str)
    }
}

impl NameResolver for LocaleNames {
    fn command_name(&self, id: CommandId) -> &str {
        self.lookup(&format!("commands.{}", id.key()))
            .unwrap_or_else(|| id.display_name())
    }

    fn ability_name(&self, id: AbilityId) -> &str {
        self.lookup(&format!("abilities.{}", id.key()))
            .unwrap_or_else(|| id.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FRENCH: &str = r#"{
        "locale": "fr",
        "name": "Français",
        "strings": { "commands.Fire": "Feu" }
    }"#;

    const ENGLISH: &str = r#"{
        "locale": "en",
        "name": "English",
        "strings": {
            "commands.Fire": "Fire!",
            "commands.Blizzard": "Ice",
            "abilities.Scan": "Scanner"
        }
    }"#;

    #[test]
    fn test_builtin_names() {
        assert_eq!(BuiltinNames.command_name(CommandId::QuickBlitz), "Quick Blitz");
        assert_eq!(BuiltinNames.ability_name(AbilityId::LeafBracer), "Leaf Bracer");
    }

    #[test]
    fn test_locale_fallback_chain() {
        let mut names = LocaleNames::new("en");
        names.load_locale_from_str(ENGLISH).expect("english");
        names.load_locale_from_str(FRENCH).expect("french");
        names.set_locale("fr").expect("switch");

        assert_eq!(names.command_name(CommandId::Fire), "Feu");
        assert_eq!(names.command_name(CommandId::Blizzard), "Ice");
        assert_eq!(names.ability_name(AbilityId::Scan), "Scanner");
        assert_eq!(names.command_name(CommandId::Cure), "Cure");
        assert_eq!(names.locale_name("fr"), Some("Français"));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let mut names = LocaleNames::default();
        assert!(matches!(
            names.set_locale("de"),
            Err(LocaleError::LocaleNotFound(_))
        ));
        assert_eq!(names.locale(), "en");
    }

    #[test]
    fn test_parse_error() {
        let mut names = LocaleNames::default();
        assert!(matches!(
            names.load_locale_from_str("{ not json"),
            Err(LocaleError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(FRENCH.as_bytes()).expect("write");

        let mut names = LocaleNames::default();
        names.load_locale(file.path()).expect("load");
        names.set_locale("fr").expect("switch");
        assert_eq!(names.command_name(CommandId::Fire), "Feu");
    }
}
