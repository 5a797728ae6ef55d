// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.
//!
//! [`ThemeMode`] is the persisted preference; [`ColorScheme`] is the resolved
//! palette handed to style functions.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_card: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Timer states
    pub timer_running: Color,
    pub timer_ending: Color,
    pub timer_expired: Color,

    // Navigation dots
    pub dot_inactive: Color,
    pub dot_active: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_card: palette::WHITE,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_muted: palette::GRAY_400,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            timer_running: palette::SUCCESS_500,
            timer_ending: palette::WARNING_500,
            timer_expired: palette::ERROR_500,

            dot_inactive: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            },
            dot_active: palette::PRIMARY_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            surface_card: Color::from_rgb(0.2, 0.2, 0.2),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_muted: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            timer_running: palette::SUCCESS_500,
            timer_ending: palette::WARNING_500,
            timer_expired: palette::ERROR_500,

            dot_inactive: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_200
            },
            dot_active: palette::PRIMARY_400,
        }
    }

    /// Picks the scheme matching an Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Light) {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The Iced theme to render with.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn timer_colors_escalate_consistently() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert_ne!(scheme.timer_running, scheme.timer_ending);
            assert_ne!(scheme.timer_ending, scheme.timer_expired);
        }
    }

    #[test]
    fn for_theme_follows_iced_theme() {
        assert_eq!(ColorScheme::for_theme(&Theme::Light), ColorScheme::light());
        assert_eq!(ColorScheme::for_theme(&Theme::Dark), ColorScheme::dark());
    }

    #[test]
    fn theme_mode_maps_to_iced_theme() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        // System depends on the desktop; only check it doesn't panic.
        let _ = ThemeMode::System.theme();
    }
}
