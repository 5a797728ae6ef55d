// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[presentation]` - Deck variant and scroll settle window
//! - `[timer]` - Countdown presets, auto-reset and "ending" threshold
//!
//! Every field is optional. Missing fields fall back to the constants in
//! [`defaults`], and out-of-range values are clamped when read through the
//! accessor methods, so a hand-edited file can never produce an invalid state.
//!
//! # Examples
//!
//! ```no_run
//! use teamdeck::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::presentation::{CountdownDuration, Variant};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PresentationConfig {
    /// Which deck layout to present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,

    /// Milliseconds a scroll position must stay on one slide before the
    /// navigator follows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_settle_ms: Option<u64>,
}

impl PresentationConfig {
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant.unwrap_or_default()
    }

    #[must_use]
    pub fn scroll_settle(&self) -> Duration {
        let ms = self
            .scroll_settle_ms
            .unwrap_or(DEFAULT_SCROLL_SETTLE_MS)
            .clamp(MIN_SCROLL_SETTLE_MS, MAX_SCROLL_SETTLE_MS);
        Duration::from_millis(ms)
    }
}

/// Countdown timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TimerConfig {
    /// Countdown length selected when the presentation opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_duration_secs: Option<u32>,

    /// Duration presets offered by the picker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presets: Option<Vec<u32>>,

    /// Return to idle automatically after expiry. Defaults depend on the variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_reset: Option<bool>,

    /// Delay before the automatic reset, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_reset_delay_ms: Option<u64>,

    /// Remaining seconds at or below which the display is flagged as ending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_threshold_secs: Option<u32>,
}

impl TimerConfig {
    #[must_use]
    pub fn default_duration(&self) -> CountdownDuration {
        CountdownDuration::new(self.default_duration_secs.unwrap_or(DEFAULT_COUNTDOWN_SECS))
    }

    /// Configured presets, clamped, deduplicated and sorted. Never empty.
    #[must_use]
    pub fn presets(&self) -> Vec<CountdownDuration> {
        let raw = match &self.presets {
            Some(list) if !list.is_empty() => list.clone(),
            _ => DEFAULT_COUNTDOWN_PRESETS.to_vec(),
        };
        let mut presets: Vec<CountdownDuration> =
            raw.into_iter().map(CountdownDuration::new).collect();
        presets.sort_by_key(|d| d.secs());
        presets.dedup();
        presets
    }

    #[must_use]
    pub fn auto_reset(&self, variant: Variant) -> bool {
        self.auto_reset
            .unwrap_or(matches!(variant, Variant::Scroll))
    }

    #[must_use]
    pub fn auto_reset_delay(&self) -> Duration {
        let ms = self
            .auto_reset_delay_ms
            .unwrap_or(DEFAULT_AUTO_RESET_DELAY_MS)
            .clamp(MIN_AUTO_RESET_DELAY_MS, MAX_AUTO_RESET_DELAY_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn ending_threshold(&self, variant: Variant) -> u32 {
        self.ending_threshold_secs.unwrap_or(match variant {
            Variant::Classic => CLASSIC_ENDING_THRESHOLD_SECS,
            Variant::Scroll => SCROLL_ENDING_THRESHOLD_SECS,
        })
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub presentation: PresentationConfig,

    #[serde(default)]
    pub timer: TimerConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded preferences");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default preferences");
                    return (Config::default(), Some(err.i18n_key().to_string()));
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            presentation: PresentationConfig {
                variant: Some(Variant::Scroll),
                scroll_settle_ms: Some(200),
            },
            timer: TimerConfig {
                default_duration_secs: Some(30),
                presets: Some(vec![30, 60, 90]),
                auto_reset: Some(false),
                auto_reset_delay_ms: Some(2000),
                ending_threshold_secs: Some(7),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general\nlanguage = ").expect("write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "timer = 12").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("warning-config-load"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let config: Config = toml::from_str("[timer]\nauto_reset = true\n").expect("parse");
        assert_eq!(config.timer.auto_reset, Some(true));
        assert_eq!(config.presentation.variant(), Variant::default());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn variant_parses_from_kebab_case() {
        let config: Config =
            toml::from_str("[presentation]\nvariant = \"scroll\"\n").expect("parse");
        assert_eq!(config.presentation.variant(), Variant::Scroll);
    }

    #[test]
    fn presets_are_clamped_sorted_and_deduplicated() {
        let timer = TimerConfig {
            presets: Some(vec![60, 1, 30, 60, 99_999]),
            ..TimerConfig::default()
        };
        let secs: Vec<u32> = timer.presets().iter().map(|d| d.secs()).collect();
        assert_eq!(secs, vec![MIN_COUNTDOWN_SECS, 30, 60, MAX_COUNTDOWN_SECS]);
    }

    #[test]
    fn empty_presets_fall_back_to_defaults() {
        let timer = TimerConfig {
            presets: Some(Vec::new()),
            ..TimerConfig::default()
        };
        let secs: Vec<u32> = timer.presets().iter().map(|d| d.secs()).collect();
        assert_eq!(secs, DEFAULT_COUNTDOWN_PRESETS.to_vec());
    }

    #[test]
    fn auto_reset_defaults_follow_variant() {
        let timer = TimerConfig::default();
        assert!(timer.auto_reset(Variant::Scroll));
        assert!(!timer.auto_reset(Variant::Classic));

        let forced = TimerConfig {
            auto_reset: Some(true),
            ..TimerConfig::default()
        };
        assert!(forced.auto_reset(Variant::Classic));
    }

    #[test]
    fn ending_threshold_defaults_follow_variant() {
        let timer = TimerConfig::default();
        assert_eq!(timer.ending_threshold(Variant::Classic), 5);
        assert_eq!(timer.ending_threshold(Variant::Scroll), 10);
    }

    #[test]
    fn delays_are_clamped() {
        let timer = TimerConfig {
            auto_reset_delay_ms: Some(1),
            ..TimerConfig::default()
        };
        assert_eq!(
            timer.auto_reset_delay(),
            Duration::from_millis(MIN_AUTO_RESET_DELAY_MS)
        );

        let presentation = PresentationConfig {
            scroll_settle_ms: Some(1_000_000),
            ..PresentationConfig::default()
        };
        assert_eq!(
            presentation.scroll_settle(),
            Duration::from_millis(MAX_SCROLL_SETTLE_MS)
        );
    }
}
