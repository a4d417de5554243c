// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! This module provides a single source of truth for the directories the
//! crate reads from, ensuring consistent usage across all components.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **Environment variables** (`LOCALE_LENS_CONFIG_DIR`, `LOCALE_LENS_LANG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! The explicit override has highest priority because it's the most specific -
//! when code explicitly passes a path, it should always be respected.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "LocaleLens";

/// Directory under the config directory holding language resource files.
const LANGUAGE_DIR_NAME: &str = "lang";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LOCALE_LENS_CONFIG_DIR";

/// Environment variable to override the language-resources directory.
pub const ENV_LANG_DIR: &str = "LOCALE_LENS_LANG_DIR";

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml).
///
/// # Resolution Order
///
/// 1. `LOCALE_LENS_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/LocaleLens/`
///    - macOS: `~/Library/Application Support/LocaleLens/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\LocaleLens\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the language-resources directory path.
///
/// This directory holds one hand-editable override file per language
/// (`en.xml`, `ru.xml`, ...).
pub fn get_language_dir() -> Option<PathBuf> {
    get_language_dir_with_override(None)
}

/// Returns the language-resources directory path with an optional override.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`) - most specific, for tests
/// 2. `LOCALE_LENS_LANG_DIR` environment variable (if set and non-empty)
/// 3. `<config dir>/lang/`
pub fn get_language_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_LANG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Subdirectory of the config directory
    get_app_config_dir().map(|mut path| {
        path.push(LANGUAGE_DIR_NAME);
        path
    })
}
