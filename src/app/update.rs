// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler mutates the session through the owning component's `update`
//! and turns the resulting event into runtime tasks (programmatic scrolling,
//! window close).

use super::Message;
use crate::presentation::{Session, Variant};
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::{picker, timer_panel};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Size, Task};
use std::time::Instant;

/// Identifier of the scroll surface holding every slide (scroll layout).
pub const DECK_SCROLLABLE_ID: &str = "deck-scrollable";

/// Mutable slices of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub slide_height: &'a mut f32,
    pub warnings: &'a mut Vec<String>,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.session.navigator_mut()) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Moved { index, direction } => {
            tracing::trace!(slide = index, ?direction, "explicit navigation");
            scroll_to_slide(ctx.session, index)
        }
    }
}

/// Brings the scroll surface to `index` after an explicit navigation.
///
/// The classic layout renders only the current slide and needs no task.
fn scroll_to_slide(session: &mut Session, index: usize) -> Task<Message> {
    if session.variant() != Variant::Scroll {
        return Task::none();
    }
    session.scroll_mut().begin_programmatic(index, Instant::now());
    operation::snap_to(
        Id::new(DECK_SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: relative_offset(index, session.navigator().total()),
        },
    )
}

/// Relative scroll offset that puts slide `index` of `total` at the top.
#[allow(clippy::cast_precision_loss)]
pub(super) fn relative_offset(index: usize, total: usize) -> f32 {
    if total <= 1 {
        0.0
    } else {
        (index as f32 / (total - 1) as f32).clamp(0.0, 1.0)
    }
}

pub fn handle_timer_message(
    ctx: &mut UpdateContext<'_>,
    message: timer_panel::Message,
) -> Task<Message> {
    if let timer_panel::Event::Expired(timer) = timer_panel::update(message, ctx.session) {
        tracing::info!(timer = ?timer, "time's up");
    }
    Task::none()
}

pub fn handle_picker_message(ctx: &mut UpdateContext<'_>, message: picker::Message) -> Task<Message> {
    let (concepts, barriers) = ctx.session.pickers_mut();
    picker::update(message, concepts, barriers);
    Task::none()
}

pub fn handle_scrolled(
    ctx: &mut UpdateContext<'_>,
    offset_y: f32,
    viewport_height: f32,
) -> Task<Message> {
    if viewport_height > 0.0 {
        *ctx.slide_height = viewport_height;
    }
    ctx.session
        .scroll_mut()
        .observe(offset_y, viewport_height, Instant::now());
    Task::none()
}

/// Sizes slides to the new window until the scroll viewport reports its exact height.
pub fn handle_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.slide_height = (size.height - sizing::PROGRESS_BAR_HEIGHT).max(1.0);
    Task::none()
}

/// Commits a settled scroll position to the navigator.
///
/// Only the navigator moves; no programmatic scroll is issued, since the
/// surface is already where the user left it.
pub fn handle_scroll_settle(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let current = ctx.session.navigator().current();
    let scroll = ctx.session.scroll_mut();
    scroll.expire(now);
    if let Some(index) = scroll.settle(now, current) {
        let moved = i64::try_from(index).is_ok_and(|i| ctx.session.navigator_mut().jump_to(i));
        if moved {
            tracing::debug!(slide = index, "navigator followed scroll");
        }
    }
    Task::none()
}

pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, window_id: window::Id) -> Task<Message> {
    ctx.session.teardown();
    tracing::info!("closing presentation");
    window::close(window_id)
}

pub fn handle_dismiss_warnings(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.warnings.clear();
    Task::none()
}
