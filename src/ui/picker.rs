// SPDX-License-Identifier: MPL-2.0
//! Concept picker (single select) and barrier poll (multi select).

use crate::i18n::fluent::I18n;
use crate::presentation::{Barrier, BarrierPicker, Concept, ConceptPicker};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub concepts: &'a ConceptPicker,
    pub barriers: &'a BarrierPicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectConcept(Concept),
    ToggleBarrier(Barrier),
    ClearBarriers,
}

pub fn update(message: Message, concepts: &mut ConceptPicker, barriers: &mut BarrierPicker) {
    match message {
        Message::SelectConcept(concept) => {
            concepts.select(concept);
            tracing::debug!(%concept, "concept selected");
        }
        Message::ToggleBarrier(barrier) => {
            let excluded = barriers.toggle(barrier);
            tracing::debug!(%barrier, excluded, "barrier toggled");
        }
        Message::ClearBarriers => barriers.clear(),
    }
}

pub fn view_concepts<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = Concept::ALL.into_iter().map(|concept| {
        option_card(
            concept.icon(),
            concept.name(),
            ctx.concepts.is_selected(concept),
            Message::SelectConcept(concept),
        )
    });

    let status = match ctx.concepts.selected() {
        Some(concept) => ctx
            .i18n
            .tr_with_args("concept-picker-chosen", &[("concept", concept.name().into())]),
        None => ctx.i18n.tr("concept-picker-none"),
    };

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("concept-picker-title")).size(typography::TITLE_SM))
        .push(grid(cards))
        .push(Text::new(status).size(typography::BODY_LG))
        .into()
}

pub fn view_barriers<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = Barrier::ALL.into_iter().map(|barrier| {
        option_card(
            barrier.icon(),
            barrier.name(),
            ctx.barriers.is_excluded(barrier),
            Message::ToggleBarrier(barrier),
        )
    });

    let count = ctx.barriers.excluded_count();
    let summary = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("barrier-picker-count", &[("count", count.into())]),
            )
            .size(typography::BODY),
        )
        .push(
            button(Text::new(ctx.i18n.tr("barrier-picker-clear")).size(typography::BODY))
                .on_press_maybe((count > 0).then_some(Message::ClearBarriers))
                .style(styles::button::secondary),
        );

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("barrier-picker-title")).size(typography::TITLE_SM))
        .push(grid(cards))
        .push(summary)
        .into()
}

/// Lays cards out three per row.
fn grid<'a>(cards: impl Iterator<Item = Element<'a, Message>>) -> Element<'a, Message> {
    const PER_ROW: usize = 3;

    let mut column = Column::new().spacing(spacing::SM).align_x(Horizontal::Center);
    let mut row = Row::new().spacing(spacing::SM);
    let mut in_row = 0;
    for card in cards {
        row = row.push(card);
        in_row += 1;
        if in_row == PER_ROW {
            column = column.push(row);
            row = Row::new().spacing(spacing::SM);
            in_row = 0;
        }
    }
    if in_row > 0 {
        column = column.push(row);
    }
    column.into()
}

fn option_card<'a>(
    icon: &'static str,
    name: &'static str,
    is_selected: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new(icon).size(typography::ICON))
        .push(Text::new(name).size(typography::BODY));

    button(content)
        .padding(spacing::SM)
        .width(sizing::PICKER_CARD_WIDTH)
        .on_press(on_press)
        .style(styles::button::picker_card(is_selected))
        .into()
}
