// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::presentation::TimerPhase;
use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-slide background.
pub fn slide(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Content card on a slide.
///
/// Derived from the theme background with a slight opacity so cards read as
/// raised in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    let base = colors.surface_card;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.text_muted
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Bar hosting the controls and counter.
pub fn toolbar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_secondary),
        ..Default::default()
    }
}

/// Countdown panel; the border tracks the timer state.
pub fn timer_panel(
    phase: TimerPhase,
    is_ending: bool,
) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let accent = timer_accent(&colors, phase, is_ending);

        container::Style {
            background: Some(Background::Color(colors.surface_card)),
            text_color: Some(accent.unwrap_or(colors.text_primary)),
            border: Border {
                color: accent.unwrap_or(colors.text_muted),
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

/// Color of the countdown digits; `None` keeps the regular text color.
fn timer_accent(colors: &ColorScheme, phase: TimerPhase, is_ending: bool) -> Option<Color> {
    match phase {
        TimerPhase::Expired => Some(colors.timer_expired),
        TimerPhase::Running if is_ending => Some(colors.timer_ending),
        TimerPhase::Running => Some(colors.timer_running),
        TimerPhase::Idle => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_accent_escalates_near_the_end() {
        let colors = ColorScheme::light();
        assert_eq!(timer_accent(&colors, TimerPhase::Idle, true), None);
        assert_eq!(
            timer_accent(&colors, TimerPhase::Running, false),
            Some(colors.timer_running)
        );
        assert_eq!(
            timer_accent(&colors, TimerPhase::Running, true),
            Some(colors.timer_ending)
        );
        assert_eq!(
            timer_accent(&colors, TimerPhase::Expired, true),
            Some(colors.timer_expired)
        );
    }
}
