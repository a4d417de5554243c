// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate.

use crate::i18n::Language;

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Default display language when none is configured.
pub const DEFAULT_LANGUAGE: Language = Language::English;
