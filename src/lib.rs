// SPDX-License-Identifier: MPL-2.0
//! `locale_lens` loads named, human-editable display strings for an
//! application UI, selects the active set based on a configured language, and
//! refreshes consumers when the language changes at runtime.
//!
//! Overrides live in one small XML file per language (`en.xml`, `ru.xml`, ...)
//! and are merged onto compiled-in defaults, so a missing or partially
//! translated file still yields a fully populated string set. A
//! development-time sync pass keeps existing files in step with the schema.

#![doc(html_root_url = "https://docs.rs/locale_lens/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod paths;
