// SPDX-License-Identifier: MPL-2.0
//! The closed set of supported display languages.
//!
//! Each language maps to exactly one two-letter locale code and one resource
//! file name. Because the set is a closed enum, an out-of-range selector is
//! unrepresentable and needs no runtime guard.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    English,
    Russian,
    Belarusian,
}

impl Language {
    /// All supported languages, in declaration order.
    pub const ALL: [Language; 3] = [Language::English, Language::Russian, Language::Belarusian];

    /// Returns the two-letter locale code for this language.
    pub fn locale_code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Belarusian => "be",
        }
    }

    /// Returns the name of this language's resource file (`<code>.xml`).
    pub fn resource_file(self) -> String {
        format!("{}.xml", self.locale_code())
    }

    /// Returns the English display name, suitable for a language picker.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Russian",
            Language::Belarusian => "Belarusian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Parses a display name or a locale code, case-insensitively.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lower = raw.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lower == lang.label().to_lowercase() || lower == lang.locale_code())
            .ok_or_else(|| Error::Config(format!("unknown language: {}", raw)))
    }
}
