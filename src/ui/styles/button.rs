// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main action (start, next).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(),
    }
}

/// Grayed out, non-interactive (previous on the first slide, next on the last).
#[must_use]
pub fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Secondary action (pause, reset, unselected preset).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            })),
            text_color,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled(),
    }
}

/// Selected member of a toggle group (active duration preset).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        // Presets cannot change while running; keep the choice visible.
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::PRIMARY_500
            })),
            ..primary(theme, button::Status::Active)
        },
        _ => primary(theme, status),
    }
}

/// Picker card, highlighted when `is_selected`.
pub fn picker_card(is_selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let (background, border_color, width) = if is_selected {
            (
                if matches!(theme, Theme::Light) {
                    palette::PRIMARY_100
                } else {
                    palette::PRIMARY_700
                },
                colors.brand_primary,
                border::WIDTH_LG,
            )
        } else {
            (colors.surface_card, colors.text_muted, border::WIDTH_SM)
        };
        let hovered = matches!(status, button::Status::Hovered);

        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.text_primary,
            border: Border {
                color: if hovered { colors.brand_secondary } else { border_color },
                width,
                radius: radius::LG.into(),
            },
            shadow: if hovered { shadow::MD } else { shadow::SM },
            snap: true,
        }
    }
}

/// Round navigation dot; the current slide is filled with the brand color.
pub fn nav_dot(is_current: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let fill = match (is_current, status) {
            (true, _) => colors.dot_active,
            (false, button::Status::Hovered) => colors.brand_secondary,
            (false, _) => colors.dot_inactive,
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: fill,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn disabled_primary_is_gray() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_200)));
    }

    #[test]
    fn picker_card_border_marks_selection() {
        let selected = picker_card(true)(&Theme::Light, button::Status::Active);
        let plain = picker_card(false)(&Theme::Light, button::Status::Active);
        assert!(selected.border.width > plain.border.width);
        assert_ne!(selected.background, plain.background);
    }

    #[test]
    fn current_nav_dot_differs_from_others() {
        let current = nav_dot(true)(&Theme::Dark, button::Status::Active);
        let other = nav_dot(false)(&Theme::Dark, button::Status::Active);
        assert_ne!(current.background, other.background);
    }

    #[test]
    fn selected_preset_stays_highlighted_when_disabled() {
        let style = selected(&Theme::Dark, button::Status::Disabled);
        assert_ne!(style.background, disabled().background);
    }
}
