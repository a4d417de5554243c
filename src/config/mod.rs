// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Selected display language
//! - `[resources]` - Language-resources directory override
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `LOCALE_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use locale_lens::config::{self, Config};
//! use locale_lens::i18n::Language;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Language::Russian;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Selected display language.
    #[serde(default)]
    pub language: Language,
}

/// Language-resources settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResourcesConfig {
    /// Explicit language-resources directory. When unset, the directory is
    /// resolved through [`paths::get_language_dir`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Language-resources settings.
    #[serde(default)]
    pub resources: ResourcesConfig,
}

impl Config {
    /// Resolves the language-resources directory for this configuration.
    ///
    /// An explicit `[resources] dir` setting wins; otherwise the directory is
    /// resolved through [`paths::get_language_dir`].
    pub fn language_dir(&self) -> Option<PathBuf> {
        self.language_dir_with_override(None)
    }

    /// Resolves the language-resources directory with an optional override.
    ///
    /// `override_dir` is the language-resources directory itself (for tests),
    /// consulted only when no explicit `[resources] dir` is configured.
    pub fn language_dir_with_override(&self, override_dir: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(dir) = &self.resources.dir {
            return Some(dir.clone());
        }
        paths::get_language_dir_with_override(override_dir)
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    return (
                        Config::default(),
                        Some(format!("failed to read settings, using defaults: {}", error)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, DEFAULT_LANGUAGE);
        assert_eq!(config.resources.dir, None);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Language::Belarusian,
            },
            resources: ResourcesConfig {
                dir: Some(PathBuf::from("/srv/lang")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language, Language::Belarusian);
        assert_eq!(loaded.resources.dir, Some(PathBuf::from("/srv/lang")));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        let config = Config {
            general: GeneralConfig {
                language: Language::Russian,
            },
            ..Config::default()
        };
        save_to_path(&config, &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(
            content.contains("[general]"),
            "should have [general] section"
        );
        assert!(
            content.contains("language = \"russian\""),
            "should have language in general section"
        );
    }

    #[test]
    fn missing_language_field_falls_back_to_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.general.language, DEFAULT_LANGUAGE);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Language::Russian,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let expected_path = base_dir.join("settings.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Language::Russian);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_resources_dir_wins_over_resolved_default() {
        let config = Config {
            resources: ResourcesConfig {
                dir: Some(PathBuf::from("/explicit/lang")),
            },
            ..Config::default()
        };
        assert_eq!(
            config.language_dir_with_override(Some(PathBuf::from("/ignored"))),
            Some(PathBuf::from("/explicit/lang"))
        );
    }

    #[test]
    fn language_dir_falls_back_to_paths_resolution() {
        let config = Config::default();
        let resolved = config.language_dir_with_override(Some(PathBuf::from("/base/lang")));
        assert_eq!(resolved, Some(PathBuf::from("/base/lang")));
    }
}
