// SPDX-License-Identifier: MPL-2.0
//! Loading and caching of the merged UI strings.
//!
//! [`StringLoader`] resolves the active language to a resource file path,
//! merges the file's overrides onto the compiled-in defaults, and caches the
//! result until it is explicitly invalidated. Consumers that need to react
//! to a language change register a subscriber; subscribers are notified
//! synchronously, after the cache has been cleared, with no payload.
//!
//! The loader is a plain value constructed by the host and passed wherever
//! it is needed. Every failure on the read path degrades to defaults; no
//! error ever reaches a consumer through [`StringLoader::strings`].

use crate::config::Config;
use crate::i18n::catalog::Language;
use crate::i18n::resource::{self, ResourceTable};
use crate::i18n::strings::UiStrings;
use std::path::PathBuf;

/// Callback invoked after each invalidation.
pub type Subscriber = Box<dyn Fn()>;

/// Loads, merges, and caches the UI strings for the active language.
pub struct StringLoader {
    language: Language,
    language_dir: PathBuf,
    defaults_only: bool,
    cache: Option<UiStrings>,
    subscribers: Vec<Subscriber>,
}

impl StringLoader {
    /// Creates a loader reading override files from `language_dir`.
    pub fn new(language: Language, language_dir: impl Into<PathBuf>) -> Self {
        Self {
            language,
            language_dir: language_dir.into(),
            defaults_only: false,
            cache: None,
            subscribers: Vec::new(),
        }
    }

    /// Creates a loader that serves pure defaults and performs no file I/O.
    ///
    /// For tooling contexts (design hosts, golden-image tests) where disk
    /// access would be an unwanted side effect.
    pub fn defaults_only(language: Language) -> Self {
        Self {
            language,
            language_dir: PathBuf::new(),
            defaults_only: true,
            cache: None,
            subscribers: Vec::new(),
        }
    }

    /// Creates a loader from the ambient configuration.
    ///
    /// Falls back to defaults-only when no language directory can be
    /// resolved, which behaves exactly like "no override file exists".
    pub fn from_config(config: &Config) -> Self {
        match config.language_dir() {
            Some(dir) => Self::new(config.general.language, dir),
            None => Self::defaults_only(config.general.language),
        }
    }

    /// Returns the currently active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the merged strings for the active language.
    ///
    /// The first access after construction or [`invalidate`](Self::invalidate)
    /// reads the resource file from disk; later accesses return the cached
    /// value without touching the disk. This never fails: an absent or
    /// unreadable file yields the compiled-in defaults.
    pub fn strings(&mut self) -> &UiStrings {
        let strings = match self.cache.take() {
            Some(cached) => cached,
            None => self.load(),
        };
        self.cache.insert(strings)
    }

    /// Discards the cached strings and notifies every subscriber.
    ///
    /// Subscribers run synchronously, after the cache has been cleared, so a
    /// subscriber that re-reads [`strings`](Self::strings) observes the fresh
    /// value.
    pub fn invalidate(&mut self) {
        self.cache = None;
        for notify in &self.subscribers {
            notify();
        }
    }

    /// Switches the active language and invalidates the cache.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.invalidate();
    }

    /// Registers a callback to run after each invalidation.
    pub fn subscribe(&mut self, subscriber: impl Fn() + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Loads the resource file for the active language and merges it onto
    /// the defaults. Absent file, unreadable file, and malformed content all
    /// degrade to an empty override table.
    fn load(&self) -> UiStrings {
        if self.defaults_only {
            return UiStrings::default();
        }

        let path = self.language_dir.join(self.language.resource_file());
        let table = match resource::load(&path) {
            Ok(Some(table)) => table,
            Ok(None) => ResourceTable::empty(),
            Err(error) => {
                eprintln!(
                    "Failed to read {}: {}; using default strings",
                    path.display(),
                    error
                );
                ResourceTable::empty()
            }
        };
        UiStrings::merged(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneralConfig, ResourcesConfig};
    use std::cell::Cell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::tempdir;

    fn write_ru_overrides(dir: &std::path::Path) {
        fs::write(
            dir.join("ru.xml"),
            "<strings>\n    <string key=\"HelloSentence\" value=\"Привет!\"/>\n</strings>\n",
        )
        .expect("write ru.xml");
    }

    #[test]
    fn missing_file_yields_defaults_without_error() {
        let dir = tempdir().expect("create temp dir");
        let mut loader = StringLoader::new(Language::Russian, dir.path());

        assert_eq!(*loader.strings(), UiStrings::default());
    }

    #[test]
    fn overrides_are_merged_onto_defaults() {
        let dir = tempdir().expect("create temp dir");
        write_ru_overrides(dir.path());
        let mut loader = StringLoader::new(Language::Russian, dir.path());

        let strings = loader.strings();
        assert_eq!(strings.hello_sentence, "Привет!");
        assert_eq!(strings.title, "Main window");
        assert_eq!(strings.current_language, "Current language");
    }

    #[test]
    fn cached_value_survives_file_changes_until_invalidated() {
        let dir = tempdir().expect("create temp dir");
        let mut loader = StringLoader::new(Language::Russian, dir.path());
        assert_eq!(loader.strings().hello_sentence, "Hello!");

        // The file appears after the first load; the cache must not notice.
        write_ru_overrides(dir.path());
        assert_eq!(loader.strings().hello_sentence, "Hello!");

        loader.invalidate();
        assert_eq!(loader.strings().hello_sentence, "Привет!");
    }

    #[test]
    fn invalidate_and_reload_with_unchanged_file_is_idempotent() {
        let dir = tempdir().expect("create temp dir");
        write_ru_overrides(dir.path());
        let mut loader = StringLoader::new(Language::Russian, dir.path());

        let before = loader.strings().clone();
        loader.invalidate();
        assert_eq!(*loader.strings(), before);
    }

    #[test]
    fn malformed_file_degrades_to_defaults() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join("ru.xml"), "<strings><string key=")
            .expect("write broken file");
        let mut loader = StringLoader::new(Language::Russian, dir.path());

        assert_eq!(*loader.strings(), UiStrings::default());
    }

    #[test]
    fn set_language_switches_the_resource_file() {
        let dir = tempdir().expect("create temp dir");
        write_ru_overrides(dir.path());
        fs::write(
            dir.path().join("be.xml"),
            "<strings><string key=\"HelloSentence\" value=\"Прывітанне!\"/></strings>",
        )
        .expect("write be.xml");

        let mut loader = StringLoader::new(Language::Russian, dir.path());
        assert_eq!(loader.strings().hello_sentence, "Привет!");

        loader.set_language(Language::Belarusian);
        assert_eq!(loader.language(), Language::Belarusian);
        assert_eq!(loader.strings().hello_sentence, "Прывітанне!");
    }

    #[test]
    fn subscriber_is_notified_once_per_invalidation() {
        let dir = tempdir().expect("create temp dir");
        let mut loader = StringLoader::new(Language::English, dir.path());

        let notified = Rc::new(Cell::new(0));
        let observer = Rc::clone(&notified);
        loader.subscribe(move || observer.set(observer.get() + 1));

        loader.strings();
        assert_eq!(notified.get(), 0, "plain access must not notify");

        loader.invalidate();
        assert_eq!(notified.get(), 1);

        loader.set_language(Language::Russian);
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn all_subscribers_are_notified() {
        let dir = tempdir().expect("create temp dir");
        let mut loader = StringLoader::new(Language::English, dir.path());

        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let observer = Rc::clone(&first);
        loader.subscribe(move || observer.set(true));
        let observer = Rc::clone(&second);
        loader.subscribe(move || observer.set(true));

        loader.invalidate();
        assert!(first.get());
        assert!(second.get());
    }

    #[test]
    fn defaults_only_loader_ignores_override_files() {
        let dir = tempdir().expect("create temp dir");
        write_ru_overrides(dir.path());

        let mut loader = StringLoader::defaults_only(Language::Russian);
        assert_eq!(*loader.strings(), UiStrings::default());
    }

    #[test]
    fn from_config_uses_configured_language_and_directory() {
        let dir = tempdir().expect("create temp dir");
        write_ru_overrides(dir.path());

        let config = Config {
            general: GeneralConfig {
                language: Language::Russian,
            },
            resources: ResourcesConfig {
                dir: Some(dir.path().to_path_buf()),
            },
        };
        let mut loader = StringLoader::from_config(&config);
        assert_eq!(loader.language(), Language::Russian);
        assert_eq!(loader.strings().hello_sentence, "Привет!");
    }
}
