// SPDX-License-Identifier: MPL-2.0
//! Deck navigation controls.
//!
//! Previous/next buttons, the slide counter, the navigation dots and the
//! progress bar. The classic layout shows them as a bottom bar; the scroll
//! layout uses a thin progress bar on top and a vertical rail of dots.
//! All of them drive the same [`SlideNavigator`].

use crate::i18n::fluent::I18n;
use crate::presentation::{Direction, SlideNavigator};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, progress_bar, tooltip, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navigation controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigator: &'a SlideNavigator,
}

/// Messages emitted by the navigation controls and the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    JumpTo(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The current slide changed.
    Moved { index: usize, direction: Direction },
}

/// Process a navigation message and return the corresponding event.
pub fn update(message: Message, navigator: &mut SlideNavigator) -> Event {
    let moved = match message {
        Message::Previous => navigator.retreat(),
        Message::Next => navigator.advance(),
        Message::JumpTo(index) => i64::try_from(index).is_ok_and(|i| navigator.jump_to(i)),
    };

    if moved {
        tracing::debug!(slide = navigator.current(), "slide changed");
        Event::Moved {
            index: navigator.current(),
            direction: navigator.last_direction(),
        }
    } else {
        Event::None
    }
}

/// Localized "n / total" counter.
#[must_use]
pub fn counter_label(i18n: &I18n, navigator: &SlideNavigator) -> String {
    i18n.tr_with_args(
        "slide-counter",
        &[
            ("current", (navigator.current() + 1).into()),
            ("total", navigator.total().into()),
        ],
    )
}

/// Bottom bar of the classic layout.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let previous = nav_button(
        ctx.i18n.tr("nav-previous"),
        ctx.i18n.tr("nav-previous-tooltip"),
        (!ctx.navigator.is_at_first()).then_some(Message::Previous),
    );
    let next = nav_button(
        ctx.i18n.tr("nav-next"),
        ctx.i18n.tr("nav-next-tooltip"),
        (!ctx.navigator.is_at_last()).then_some(Message::Next),
    );

    let counter = Text::new(counter_label(ctx.i18n, ctx.navigator)).size(typography::CAPTION);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(previous)
        .push(Space::new().width(Length::Fill))
        .push(dots(&ctx, DotAxis::Horizontal))
        .push(Space::new().width(Length::Fill))
        .push(counter)
        .push(next);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

/// Vertical dot rail of the scroll layout.
pub fn dot_rail<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let counter = Text::new(counter_label(ctx.i18n, ctx.navigator)).size(typography::CAPTION);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(dots(&ctx, DotAxis::Vertical))
            .push(counter),
    )
    .padding(spacing::SM)
    .height(Length::Fill)
    .align_y(Vertical::Center)
    .into()
}

/// Thin bar showing `(current + 1) / total`.
pub fn progress<'a>(navigator: &SlideNavigator) -> Element<'a, Message> {
    progress_bar(0.0..=1.0, navigator.progress())
        .girth(sizing::PROGRESS_BAR_HEIGHT)
        .style(styles::progress::deck)
        .into()
}

enum DotAxis {
    Horizontal,
    Vertical,
}

fn dots<'a>(ctx: &ViewContext<'a>, axis: DotAxis) -> Element<'a, Message> {
    let current = ctx.navigator.current();
    let items: Vec<Element<'a, Message>> = (0..ctx.navigator.total())
        .map(|index| {
            let size = if index == current {
                sizing::DOT_ACTIVE
            } else {
                sizing::DOT
            };
            let dot = button(Space::new())
                .width(size)
                .height(size)
                .on_press(Message::JumpTo(index))
                .style(styles::button::nav_dot(index == current));
            let hint = ctx
                .i18n
                .tr_with_args("nav-dot-tooltip", &[("number", (index + 1).into())]);
            tooltip(dot, Text::new(hint).size(typography::CAPTION), tooltip_side(&axis)).into()
        })
        .collect();

    match axis {
        DotAxis::Horizontal => Row::with_children(items)
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .into(),
        DotAxis::Vertical => Column::with_children(items)
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .into(),
    }
}

fn tooltip_side(axis: &DotAxis) -> tooltip::Position {
    match axis {
        DotAxis::Horizontal => tooltip::Position::Top,
        DotAxis::Vertical => tooltip::Position::Left,
    }
}

fn nav_button<'a>(
    label: String,
    hint: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let is_enabled = on_press.is_some();
    let btn = button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .height(sizing::BUTTON_HEIGHT)
        .on_press_maybe(on_press);
    let btn = if is_enabled {
        btn.style(styles::button::primary)
    } else {
        btn.style(|_theme, _status| styles::button::disabled())
    };

    tooltip(btn, Text::new(hint).size(typography::CAPTION), tooltip::Position::Top).into()
}
