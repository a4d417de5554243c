// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module loads named UI display strings for the active language. Each
//! language has an optional hand-editable XML override file; its entries are
//! merged onto compiled-in defaults, so a partially translated file yields a
//! fully populated string set.
//!
//! # Features
//!
//! - Closed set of supported languages with locale-code/file-name mapping
//! - Partial-override merge onto compiled-in defaults
//! - Cached merged strings with explicit invalidation and change notification
//! - Development-time sync pass keeping override files schema-complete

pub mod catalog;
pub mod loader;
pub mod resource;
pub mod strings;
pub mod sync;

pub use catalog::Language;
pub use loader::StringLoader;
pub use resource::ResourceTable;
pub use strings::UiStrings;
