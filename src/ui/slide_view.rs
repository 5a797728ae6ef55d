// SPDX-License-Identifier: MPL-2.0
//! Renders one slide from its content blocks.
//!
//! Interactive blocks are delegated to [`timer_panel`] and [`picker`], which
//! read their state from the session. Slide copy itself is static.

use crate::i18n::fluent::I18n;
use crate::presentation::{Block, Card, Session, Slide, Stat, TimerId, Widget};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{picker, styles, timer_panel};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub slide: &'a Slide,
    pub session: &'a Session,
    /// Fixed slide height (scroll layout); `None` fills the available space.
    pub height: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Timer(timer_panel::Message),
    Picker(picker::Message),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let blocks = ctx.slide.blocks.iter().map(|block| view_block(&ctx, block));

    let content = Column::with_children(blocks)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::SLIDE_MAX_WIDTH);

    let height = ctx.height.map_or(Length::Fill, Length::Fixed);

    Container::new(content)
        .padding(spacing::XXL)
        .width(Length::Fill)
        .height(height)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::slide)
        .into()
}

fn view_block<'a>(ctx: &ViewContext<'a>, block: &'a Block) -> Element<'a, Message> {
    match *block {
        Block::Title { words, subtitle } => title(words, subtitle),
        Block::Heading(text) => Text::new(text).size(typography::TITLE_LG).into(),
        Block::Paragraph(text) => Text::new(text).size(typography::BODY_LG).into(),
        Block::Stats(stats) => stats_row(stats),
        Block::Cards(cards) => card_grid(cards),
        Block::Numbered(items) => numbered(items),
        Block::Quote { text, author } => Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(Text::new(format!("“{text}”")).size(typography::TITLE_SM))
            .push(Text::new(format!("- {author}")).size(typography::BODY))
            .into(),
        Block::Interactive(widget) => view_widget(ctx, widget),
    }
}

fn view_widget<'a>(ctx: &ViewContext<'a>, widget: Widget) -> Element<'a, Message> {
    let session = ctx.session;
    let threshold = session.settings().ending_threshold_secs;
    match widget {
        Widget::RoundTimers => {
            timer_panel::view_rounds(ctx.i18n, session.timers(), session.time_format(), threshold)
                .map(Message::Timer)
        }
        Widget::Countdown => match session.timer(TimerId::Main) {
            Some(timer) => timer_panel::view(timer_panel::ViewContext {
                i18n: ctx.i18n,
                timer,
                format: session.time_format(),
                ending_threshold_secs: threshold,
                presets: &session.settings().presets,
            })
            .map(Message::Timer),
            None => Column::new().into(),
        },
        Widget::ConceptPicker => picker::view_concepts(&picker_context(ctx)).map(Message::Picker),
        Widget::BarrierPicker => picker::view_barriers(&picker_context(ctx)).map(Message::Picker),
    }
}

fn picker_context<'a>(ctx: &ViewContext<'a>) -> picker::ViewContext<'a> {
    picker::ViewContext {
        i18n: ctx.i18n,
        concepts: ctx.session.concepts(),
        barriers: ctx.session.barriers(),
    }
}

fn title<'a>(words: &'static [&'static str], subtitle: &'static str) -> Element<'a, Message> {
    // Alternate accent colors word by word.
    let line = words.iter().enumerate().map(|(i, word)| {
        let color = if i % 2 == 0 {
            palette::PRIMARY_500
        } else {
            palette::ACCENT_500
        };
        Text::new(*word).size(typography::DISPLAY).color(color).into()
    });

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Row::with_children(line).spacing(spacing::MD))
        .push(Text::new(subtitle).size(typography::TITLE_SM))
        .into()
}

fn stats_row<'a>(stats: &'static [Stat]) -> Element<'a, Message> {
    let items = stats.iter().map(|stat| {
        Container::new(
            Column::new()
                .align_x(Horizontal::Center)
                .push(Text::new(stat.value).size(typography::TITLE_MD))
                .push(Text::new(stat.label).size(typography::CAPTION)),
        )
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
    });

    Row::with_children(items).spacing(spacing::LG).into()
}

fn card_grid<'a>(cards: &'static [Card]) -> Element<'a, Message> {
    let per_row = if cards.len() == 4 { 2 } else { 3 };
    let rows = cards.chunks(per_row).map(|chunk| {
        Row::with_children(chunk.iter().map(card))
            .spacing(spacing::MD)
            .into()
    });

    Column::with_children(rows)
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .into()
}

fn card<'a>(card: &'static Card) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(card.icon).size(typography::ICON))
        .push(Text::new(card.title).size(typography::TITLE_MD))
        .push(Text::new(card.body).size(typography::BODY));

    if let Some(detail) = card.detail {
        content = content.push(Text::new(detail).size(typography::BODY).color(palette::SUCCESS_500));
    }

    Container::new(content)
        .padding(spacing::MD)
        .width(sizing::CARD_WIDTH)
        .style(styles::container::card)
        .into()
}

fn numbered<'a>(items: &'static [&'static str]) -> Element<'a, Message> {
    let lines = items.iter().enumerate().map(|(i, item)| {
        Text::new(format!("{}. {item}", i + 1))
            .size(typography::BODY_LG)
            .into()
    });
    Column::with_children(lines).spacing(spacing::XS).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::presentation::{SessionSettings, Variant};

    #[test]
    fn every_slide_of_both_decks_renders() {
        let i18n = I18n::default();
        for variant in [Variant::Classic, Variant::Scroll] {
            let session = Session::new(SessionSettings::from_config(&Config::default(), variant));
            for slide in session.deck().slides() {
                let _element = view(ViewContext {
                    i18n: &i18n,
                    slide,
                    session: &session,
                    height: (variant == Variant::Scroll).then_some(600.0),
                });
            }
        }
    }
}
