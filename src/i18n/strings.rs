// SPDX-License-Identifier: MPL-2.0
//! The UI string schema: every named display string with its default value.
//!
//! Override keys are enumerated in a statically declared accessor table
//! rather than discovered at runtime, so a field that cannot be overridden
//! is a compile error instead of a runtime diagnostic.

use crate::i18n::resource::ResourceTable;

/// The complete set of named UI display strings.
///
/// Field identity is the schema key (`Title`, `HelloSentence`, ...), stable
/// across versions; the Rust field names follow crate conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiStrings {
    pub title: String,
    pub hello_sentence: String,
    pub current_language: String,
}

impl Default for UiStrings {
    fn default() -> Self {
        Self {
            title: "Main window".to_string(),
            hello_sentence: "Hello!".to_string(),
            current_language: "Current language".to_string(),
        }
    }
}

/// One schema entry: the override key and accessors for its field.
struct StringField {
    key: &'static str,
    get: for<'a> fn(&'a UiStrings) -> &'a str,
    set: fn(&mut UiStrings, String),
}

/// The schema table, in field declaration order. Keys must stay unique;
/// `schema_keys_are_unique` guards that.
const SCHEMA: &[StringField] = &[
    StringField {
        key: "Title",
        get: |s| &s.title,
        set: |s, v| s.title = v,
    },
    StringField {
        key: "HelloSentence",
        get: |s| &s.hello_sentence,
        set: |s, v| s.hello_sentence = v,
    },
    StringField {
        key: "CurrentLanguage",
        get: |s| &s.current_language,
        set: |s, v| s.current_language = v,
    },
];

impl UiStrings {
    /// Returns every schema key, in field declaration order.
    pub fn keys() -> impl Iterator<Item = &'static str> {
        SCHEMA.iter().map(|field| field.key)
    }

    /// Returns the value of the field named by `key`, or `None` for a key
    /// outside the schema.
    pub fn value_of(&self, key: &str) -> Option<&str> {
        SCHEMA
            .iter()
            .find(|field| field.key == key)
            .map(|field| (field.get)(self))
    }

    /// Applies a resource table onto the compiled-in defaults.
    ///
    /// For every schema field, the table's value for that key (last entry
    /// wins) replaces the default; fields without a matching key keep their
    /// default. Keys in the table outside the schema are ignored. Pure and
    /// total: this never fails.
    pub fn merged(table: &ResourceTable) -> Self {
        let mut strings = Self::default();
        for field in SCHEMA {
            if let Some(value) = table.get(field.key) {
                (field.set)(&mut strings, value.to_string());
            }
        }
        strings
    }
}
