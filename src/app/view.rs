// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The classic layout shows the current slide above the navigation bar; the
//! scroll layout stacks every slide in one scroll surface with a progress bar
//! on top and a dot rail on the side.

use super::update::DECK_SCROLLABLE_ID;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::presentation::{Session, Variant};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::slide_view::{self, ViewContext as SlideViewContext};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Id, Row, Scrollable, Space, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub slide_height: f32,
    pub warnings: &'a [String],
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body = match ctx.session.variant() {
        Variant::Classic => view_classic(&ctx),
        Variant::Scroll => view_scroll(&ctx),
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(banner) = warnings_banner(&ctx) {
        column = column.push(banner);
    }
    column = column.push(body);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::slide)
        .into()
}

fn view_classic<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let navigator = ctx.session.navigator();
    let slide: Element<'a, Message> = match ctx.session.deck().get(navigator.current()) {
        Some(slide) => slide_view::view(SlideViewContext {
            i18n: ctx.i18n,
            slide,
            session: ctx.session,
            height: None,
        })
        .map(Message::from),
        None => Column::new().height(Length::Fill).into(),
    };

    Column::new()
        .push(Container::new(slide).height(Length::Fill))
        .push(navbar::view(NavbarViewContext {
            i18n: ctx.i18n,
            navigator,
        })
        .map(Message::Navbar))
        .into()
}

fn view_scroll<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let slides = ctx.session.deck().slides().iter().map(|slide| {
        slide_view::view(SlideViewContext {
            i18n: ctx.i18n,
            slide,
            session: ctx.session,
            height: Some(ctx.slide_height),
        })
        .map(Message::from)
    });

    let surface = Scrollable::new(Column::with_children(slides).width(Length::Fill))
        .id(Id::new(DECK_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::hidden()))
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        });

    let navigator = ctx.session.navigator();
    let rail = navbar::dot_rail(NavbarViewContext {
        i18n: ctx.i18n,
        navigator,
    })
    .map(Message::Navbar);

    Column::new()
        .push(navbar::progress(navigator).map(Message::Navbar))
        .push(
            Row::new()
                .height(Length::Fill)
                .push(surface)
                .push(rail),
        )
        .into()
}

fn warnings_banner<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if ctx.warnings.is_empty() {
        return None;
    }

    let lines = ctx
        .warnings
        .iter()
        .map(|key| Text::new(ctx.i18n.tr(key)).size(typography::BODY).into());

    let row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Column::with_children(lines).spacing(spacing::XXS))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("×").size(typography::TITLE_SM))
                .on_press(Message::DismissWarnings)
                .style(styles::button::secondary),
        );

    Some(
        Container::new(row)
            .width(Length::Fill)
            .style(styles::container::toolbar)
            .into(),
    )
}
