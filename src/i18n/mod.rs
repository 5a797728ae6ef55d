// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files (no assets to locate at runtime)
//! - Runtime language switching
//! - Placeable and plural support through [`fluent::I18n::tr_with_args`]
//!
//! Only the application chrome is localized. Slide copy is deck content.

pub mod fluent;

pub use fluent::{I18n, DEFAULT_LOCALE};
