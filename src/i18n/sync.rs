// SPDX-License-Identifier: MPL-2.0
//! Development-time maintenance pass for resource files.
//!
//! Translators work from the on-disk XML files, so whenever the schema gains
//! a field, every existing file needs the new key appended with its default
//! value. This pass does exactly that and nothing else: files that do not
//! exist are never created, files that are already schema-complete are not
//! touched, and the in-memory cache of any loader is unaffected.
//!
//! Intended to run once at startup in development builds:
//!
//! ```no_run
//! use locale_lens::i18n::sync;
//! # let language_dir = std::path::PathBuf::new();
//!
//! if cfg!(debug_assertions) {
//!     sync::sync_resource_files(&language_dir);
//! }
//! ```

use crate::i18n::catalog::Language;
use crate::i18n::resource;
use crate::i18n::strings::UiStrings;
use std::path::Path;

/// Appends missing schema keys (with default values) to every existing
/// resource file under `dir`.
///
/// Failures are local to one file: the file is skipped with a diagnostic and
/// the pass continues with the next language. Returns the number of entries
/// appended across all files.
pub fn sync_resource_files(dir: &Path) -> usize {
    let defaults = UiStrings::default();
    let mut appended = 0;

    for language in Language::ALL {
        let path = dir.join(language.resource_file());
        if !path.exists() {
            continue;
        }

        let table = match resource::load(&path) {
            Ok(Some(table)) => table,
            Ok(None) => continue,
            Err(error) => {
                eprintln!("Skipping sync for {}: {}", path.display(), error);
                continue;
            }
        };

        let missing = table.missing_keys(UiStrings::keys());
        if missing.is_empty() {
            continue;
        }

        let entries: Vec<(&str, &str)> = missing
            .iter()
            .filter_map(|&key| defaults.value_of(key).map(|value| (key, value)))
            .collect();

        match resource::append_entries(&path, &entries) {
            Ok(()) => appended += entries.len(),
            Err(error) => eprintln!("Skipping sync for {}: {}", path.display(), error),
        }
    }

    appended
}
