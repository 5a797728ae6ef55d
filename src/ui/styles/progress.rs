// SPDX-License-Identifier: MPL-2.0
//! Deck progress bar style.

use crate::ui::design_tokens::{opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::progress_bar;
use iced::{Background, Border, Color, Theme};

pub fn deck(theme: &Theme) -> progress_bar::Style {
    let colors = ColorScheme::for_theme(theme);
    progress_bar::Style {
        background: Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.text_muted
        }),
        bar: Background::Color(colors.brand_primary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}
