// SPDX-License-Identifier: MPL-2.0
//! Countdown widgets: the two fixed round timers of the classic deck and the
//! single countdown with duration presets of the scroll deck.
//!
//! Schedule firings from the runtime are routed through this component too,
//! so every timer transition goes through [`update`].

use crate::i18n::fluent::I18n;
use crate::presentation::{
    CountdownDuration, CountdownTimer, FireOutcome, ScheduleId, Session, TimeFormat, TimerId,
    TimerPhase,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render a countdown.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub timer: &'a CountdownTimer,
    pub format: TimeFormat,
    pub ending_threshold_secs: u32,
    /// Presets offered next to the countdown; empty for fixed-length timers.
    pub presets: &'a [CountdownDuration],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Start(TimerId),
    Pause(TimerId),
    Reset(TimerId),
    SelectDuration(TimerId, CountdownDuration),
    /// A runtime schedule delivered a firing.
    Fired { timer: TimerId, schedule: ScheduleId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Expired(TimerId),
}

/// Applies `message` to the session's timers.
pub fn update(message: Message, session: &mut Session) -> Event {
    match message {
        Message::Start(id) => {
            if let Some(timer) = session.timer_mut(id) {
                timer.start();
            }
            Event::None
        }
        Message::Pause(id) => {
            if let Some(timer) = session.timer_mut(id) {
                timer.pause();
            }
            Event::None
        }
        Message::Reset(id) => {
            if let Some(timer) = session.timer_mut(id) {
                timer.reset();
            }
            Event::None
        }
        Message::SelectDuration(id, duration) => {
            if let Some(timer) = session.timer_mut(id) {
                if !timer.select_duration(duration) {
                    tracing::debug!(timer = ?id, "duration change refused while running");
                }
            }
            Event::None
        }
        Message::Fired { timer, schedule } => {
            match session.timer_mut(timer).map(|t| t.fire(schedule)) {
                Some(FireOutcome::Expired) => Event::Expired(timer),
                Some(FireOutcome::Stale) => {
                    tracing::trace!(timer = ?timer, schedule = schedule.value(), "stale firing ignored");
                    Event::None
                }
                _ => Event::None,
            }
        }
    }
}

/// Localized label of a timer.
fn title(i18n: &I18n, id: TimerId) -> Option<String> {
    match id {
        TimerId::Quick => Some(i18n.tr("timer-quick-round")),
        TimerId::Extended => Some(i18n.tr("timer-extended-round")),
        TimerId::Main => None,
    }
}

/// Renders one countdown panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let timer = ctx.timer;
    let id = timer.id();
    let is_ending = timer.is_ending(ctx.ending_threshold_secs);

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center);

    if let Some(label) = title(ctx.i18n, id) {
        content = content.push(Text::new(label).size(typography::TITLE_SM));
    }

    content = content.push(Text::new(timer.display(ctx.format)).size(typography::TIMER));

    if timer.phase() == TimerPhase::Expired {
        content = content.push(Text::new(ctx.i18n.tr("timer-times-up")).size(typography::BODY_LG));
    }

    if !ctx.presets.is_empty() {
        content = content.push(presets_row(&ctx));
    }

    content = content.push(controls_row(ctx.i18n, timer));

    Container::new(content)
        .padding(spacing::LG)
        .width(sizing::TIMER_PANEL_WIDTH)
        .style(styles::container::timer_panel(timer.phase(), is_ending))
        .into()
}

/// Two fixed round timers side by side.
pub fn view_rounds<'a>(
    i18n: &'a I18n,
    timers: &'a [CountdownTimer],
    format: TimeFormat,
    ending_threshold_secs: u32,
) -> Element<'a, Message> {
    let panels = timers
        .iter()
        .filter(|t| matches!(t.id(), TimerId::Quick | TimerId::Extended))
        .map(|timer| {
            view(ViewContext {
                i18n,
                timer,
                format,
                ending_threshold_secs,
                presets: &[],
            })
        });

    Row::with_children(panels)
        .spacing(spacing::XL)
        .align_y(Vertical::Top)
        .into()
}

fn presets_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let timer = ctx.timer;
    let locked = timer.is_running();

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("timer-duration-label")).size(typography::CAPTION));

    for &preset in ctx.presets {
        let label = ctx
            .i18n
            .tr_with_args("timer-preset-seconds", &[("seconds", preset.secs().into())]);
        let style = if preset == timer.duration() {
            styles::button::selected
        } else {
            styles::button::secondary
        };
        row = row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press_maybe((!locked).then_some(Message::SelectDuration(timer.id(), preset)))
                .style(style),
        );
    }

    row.into()
}

fn controls_row<'a>(i18n: &I18n, timer: &CountdownTimer) -> Element<'a, Message> {
    let id = timer.id();
    let primary = match timer.phase() {
        TimerPhase::Running => button(Text::new(i18n.tr("timer-pause")))
            .on_press(Message::Pause(id))
            .style(styles::button::secondary),
        TimerPhase::Idle if timer.remaining() < timer.duration().secs() => {
            button(Text::new(i18n.tr("timer-resume")))
                .on_press(Message::Start(id))
                .style(styles::button::primary)
        }
        TimerPhase::Idle | TimerPhase::Expired => button(Text::new(i18n.tr("timer-start")))
            .on_press(Message::Start(id))
            .style(styles::button::primary),
    };

    let reset = button(Text::new(i18n.tr("timer-reset")))
        .on_press(Message::Reset(id))
        .style(styles::button::secondary);

    Row::new()
        .spacing(spacing::SM)
        .push(primary.height(Length::Fixed(sizing::BUTTON_HEIGHT)))
        .push(reset.height(Length::Fixed(sizing::BUTTON_HEIGHT)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::presentation::{SessionSettings, Variant};

    fn session(variant: Variant) -> Session {
        Session::new(SessionSettings::from_config(&Config::default(), variant))
    }

    fn fire_current(session: &mut Session, id: TimerId) -> Event {
        let schedule = session.timer(id).unwrap().schedule().unwrap().id;
        update(
            Message::Fired {
                timer: id,
                schedule,
            },
            session,
        )
    }

    #[test]
    fn start_and_fire_counts_down() {
        let mut s = session(Variant::Classic);
        update(Message::Start(TimerId::Quick), &mut s);
        fire_current(&mut s, TimerId::Quick);
        assert_eq!(s.timer(TimerId::Quick).unwrap().remaining(), 29);
        assert_eq!(s.timer(TimerId::Extended).unwrap().remaining(), 60);
    }

    #[test]
    fn round_timers_run_independently() {
        let mut s = session(Variant::Classic);
        update(Message::Start(TimerId::Quick), &mut s);
        update(Message::Start(TimerId::Extended), &mut s);
        fire_current(&mut s, TimerId::Extended);
        update(Message::Reset(TimerId::Quick), &mut s);

        assert_eq!(s.timer(TimerId::Quick).unwrap().phase(), TimerPhase::Idle);
        assert_eq!(s.timer(TimerId::Extended).unwrap().remaining(), 59);
        assert!(s.timer(TimerId::Extended).unwrap().is_running());
    }

    #[test]
    fn expiry_is_reported() {
        let mut s = session(Variant::Scroll);
        update(
            Message::SelectDuration(TimerId::Main, CountdownDuration::new(5)),
            &mut s,
        );
        update(Message::Start(TimerId::Main), &mut s);
        let mut last = Event::None;
        for _ in 0..5 {
            last = fire_current(&mut s, TimerId::Main);
        }
        assert_eq!(last, Event::Expired(TimerId::Main));
    }

    #[test]
    fn messages_for_absent_timers_are_ignored() {
        let mut s = session(Variant::Scroll);
        assert_eq!(update(Message::Start(TimerId::Quick), &mut s), Event::None);
        assert_eq!(s.schedules().count(), 0);
    }

    #[test]
    fn stale_firing_does_not_tick() {
        let mut s = session(Variant::Scroll);
        update(Message::Start(TimerId::Main), &mut s);
        let old = s.timer(TimerId::Main).unwrap().schedule().unwrap().id;
        update(Message::Pause(TimerId::Main), &mut s);
        update(
            Message::Fired {
                timer: TimerId::Main,
                schedule: old,
            },
            &mut s,
        );
        assert_eq!(s.timer(TimerId::Main).unwrap().remaining(), 60);
    }

    #[test]
    fn panels_render_in_every_phase() {
        let i18n = I18n::default();
        let mut s = session(Variant::Scroll);
        let presets = s.settings().presets.clone();
        for step in 0..3 {
            match step {
                1 => {
                    update(Message::Start(TimerId::Main), &mut s);
                }
                2 => {
                    update(Message::Pause(TimerId::Main), &mut s);
                }
                _ => {}
            }
            let _panel = view(ViewContext {
                i18n: &i18n,
                timer: s.timer(TimerId::Main).unwrap(),
                format: TimeFormat::Padded,
                ending_threshold_secs: 10,
                presets: &presets,
            });
        }

        let classic = session(Variant::Classic);
        let _rounds = view_rounds(&i18n, classic.timers(), TimeFormat::Short, 5);
    }
}
