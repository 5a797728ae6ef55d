// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Three sources feed `App::update`:
//! - native events: arrow keys, window resize and close requests
//! - one `time::every` per pending timer schedule, keyed by its schedule id
//! - a settle tick while the scroll tracker waits on something
//!
//! Subscriptions are recomputed from state after every update, so dropping a
//! schedule from a timer is enough for the runtime to stop delivering it.

use super::Message;
use crate::presentation::{Schedule, ScheduleId, Session, TimerId};
use crate::ui::{navbar, timer_panel};
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Interval of the scroll settle check; well below the default settle window.
pub const SCROLL_SETTLE_TICK: Duration = Duration::from_millis(50);

/// Keyboard navigation and window lifecycle.
///
/// Arrow keys that another widget already captured are not forwarded.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            navigation_for_key(&key).map(Message::Navbar)
        }
        _ => None,
    })
}

/// Maps the only two bound keys to navigation messages.
fn navigation_for_key(key: &keyboard::Key) -> Option<navbar::Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(navbar::Message::Previous),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(navbar::Message::Next),
        _ => None,
    }
}

/// One periodic subscription per pending timer schedule.
pub fn create_timer_subscription(session: &Session) -> Subscription<Message> {
    Subscription::batch(session.schedules().map(|(timer, schedule)| schedule_subscription(timer, schedule)))
}

fn schedule_subscription(timer: TimerId, schedule: Schedule) -> Subscription<Message> {
    time::every(schedule.interval())
        .with((timer, schedule.id))
        .map(fired)
}

fn fired(((timer, schedule), _instant): ((TimerId, ScheduleId), iced::time::Instant)) -> Message {
    Message::Timer(timer_panel::Message::Fired { timer, schedule })
}

/// Settle tick, only while the scroll tracker has a candidate or a flight.
pub fn create_scroll_settle_subscription(session: &Session) -> Subscription<Message> {
    if session.scroll().is_pending() {
        time::every(SCROLL_SETTLE_TICK).map(Message::ScrollSettleTick)
    } else {
        Subscription::none()
    }
}
