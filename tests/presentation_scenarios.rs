// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the presentation state, driven the way the
//! application drives it: navigation input, schedule firings and picks.

use std::time::{Duration, Instant};
use teamdeck::presentation::{
    Barrier, BarrierPicker, Concept, ConceptPicker, CountdownDuration, CountdownTimer,
    FireOutcome, ScrollSync, Session, SessionSettings, SlideNavigator, TimerId, TimerPhase,
    Variant,
};

const TOTAL: usize = 12;

/// Delivers `n` firings of whatever schedule the timer currently holds.
fn tick(timer: &mut CountdownTimer, n: u32) -> FireOutcome {
    let mut outcome = FireOutcome::Stale;
    for _ in 0..n {
        let schedule = timer.schedule().expect("running timer has a schedule");
        outcome = timer.fire(schedule.id);
    }
    outcome
}

#[test]
fn jump_to_lands_on_every_valid_index() {
    let mut nav = SlideNavigator::new(TOTAL);
    for i in 0..TOTAL {
        nav.jump_to(i64::try_from(i).unwrap());
        assert_eq!(nav.current(), i);
    }
}

#[test]
fn jump_to_out_of_range_is_a_no_op() {
    let mut nav = SlideNavigator::new(TOTAL);
    nav.jump_to(4);
    assert!(!nav.jump_to(-1));
    assert_eq!(nav.current(), 4);
    assert!(!nav.jump_to(TOTAL as i64));
    assert_eq!(nav.current(), 4);
}

#[test]
fn advance_at_last_and_retreat_at_first_are_idempotent() {
    let mut nav = SlideNavigator::new(TOTAL);
    for _ in 0..3 {
        assert!(!nav.retreat());
        assert_eq!(nav.current(), 0);
    }

    for _ in 0..11 {
        nav.advance();
    }
    assert_eq!(nav.current(), 11);
    for _ in 0..3 {
        assert!(!nav.advance());
        assert_eq!(nav.current(), 11);
    }
    assert_eq!(nav.progress(), 1.0);
}

#[test]
fn thirty_second_round_expires_after_thirty_ticks() {
    let mut timer = CountdownTimer::new(TimerId::Main, CountdownDuration::new(60));
    assert!(timer.select_duration(CountdownDuration::new(30)));
    assert!(timer.start());

    assert_eq!(tick(&mut timer, 29), FireOutcome::Ticked);
    assert_eq!(tick(&mut timer, 1), FireOutcome::Expired);
    assert_eq!(timer.phase(), TimerPhase::Expired);
    assert_eq!(timer.remaining(), 0);
    assert!(timer.schedule().is_none());
}

#[test]
fn pause_keeps_remaining_time() {
    let mut timer = CountdownTimer::new(TimerId::Main, CountdownDuration::new(60));
    timer.start();
    tick(&mut timer, 5);
    assert_eq!(timer.remaining(), 55);
    assert_eq!(timer.phase(), TimerPhase::Running);

    assert!(timer.pause());
    assert_eq!(timer.remaining(), 55);
    assert_eq!(timer.phase(), TimerPhase::Idle);
    assert!(timer.schedule().is_none());

    timer.start();
    tick(&mut timer, 1);
    assert_eq!(timer.remaining(), 54);
}

#[test]
fn reset_returns_to_full_idle_from_every_state() {
    let duration = CountdownDuration::new(30);
    let fresh = || CountdownTimer::new(TimerId::Quick, duration);

    let mut idle = fresh();
    let mut running = fresh();
    running.start();
    tick(&mut running, 3);
    let mut paused = running.clone();
    paused.pause();
    let mut expired = fresh();
    expired.start();
    tick(&mut expired, 30);

    for timer in [&mut idle, &mut running, &mut paused, &mut expired] {
        timer.reset();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining(), 30);
        assert!(timer.schedule().is_none());
    }
}

#[test]
fn firings_from_a_cancelled_schedule_are_ignored() {
    let mut timer = CountdownTimer::new(TimerId::Main, CountdownDuration::new(60));
    timer.start();
    let old = timer.schedule().expect("schedule").id;
    timer.pause();
    timer.start();

    assert_eq!(timer.fire(old), FireOutcome::Stale);
    assert_eq!(timer.remaining(), 60);
}

#[test]
fn auto_reset_returns_expired_timer_to_idle() {
    let mut timer = CountdownTimer::new(TimerId::Main, CountdownDuration::new(5))
        .with_auto_reset(Some(Duration::from_millis(1500)));
    timer.start();
    assert_eq!(tick(&mut timer, 5), FireOutcome::Expired);

    let reset = timer.schedule().expect("auto-reset is scheduled");
    assert_eq!(reset.interval(), Duration::from_millis(1500));
    assert_eq!(timer.fire(reset.id), FireOutcome::AutoReset);
    assert_eq!(timer.phase(), TimerPhase::Idle);
    assert_eq!(timer.remaining(), 5);
}

#[test]
fn concept_selection_overwrites() {
    let mut picker = ConceptPicker::new();
    picker.select(Concept::from_name("Aquarium").expect("known concept"));
    picker.select(Concept::from_name("Safari").expect("known concept"));
    assert_eq!(picker.selected(), Some(Concept::Safari));
    assert!(!picker.is_selected(Concept::Aquarium));
}

#[test]
fn toggling_a_barrier_twice_restores_the_set() {
    let mut picker = BarrierPicker::new();
    picker.toggle(Barrier::LackOfTrust);
    let before = picker.clone();

    let ego = Barrier::from_name("Ego & Competition").expect("known barrier");
    assert!(picker.toggle(ego));
    assert!(!picker.toggle(ego));
    assert_eq!(picker, before);
}

#[test]
fn settled_scroll_moves_the_navigator_once() {
    let mut session = Session::new(SessionSettings {
        scroll_settle: Duration::from_millis(150),
        ..SessionSettings::from_config(&Default::default(), Variant::Scroll)
    });
    let start = Instant::now();
    let height = 700.0;

    session.scroll_mut().observe(height * 4.0, height, start);
    let current = session.navigator().current();
    assert_eq!(
        session
            .scroll_mut()
            .settle(start + Duration::from_millis(100), current),
        None
    );

    let settled = session
        .scroll_mut()
        .settle(start + Duration::from_millis(200), current)
        .expect("position settled");
    session.navigator_mut().jump_to(settled as i64);
    assert_eq!(session.navigator().current(), 4);
    assert!(!session.scroll().is_pending());
}

#[test]
fn programmatic_scroll_echo_does_not_fight_navigation() {
    let mut scroll = ScrollSync::new(TOTAL, Duration::from_millis(150));
    let start = Instant::now();
    let height = 600.0;

    scroll.begin_programmatic(8, start);
    scroll.observe(height * 3.0, height, start + Duration::from_millis(20));
    scroll.observe(height * 6.0, height, start + Duration::from_millis(40));
    assert_eq!(scroll.settle(start + Duration::from_secs(1), 8), None);

    scroll.observe(height * 8.0, height, start + Duration::from_millis(60));
    assert!(!scroll.is_programmatic_in_flight());
}

#[test]
fn teardown_leaves_no_schedule_behind() {
    let mut session = Session::new(SessionSettings::from_config(
        &Default::default(),
        Variant::Classic,
    ));
    for id in [TimerId::Quick, TimerId::Extended] {
        session.timer_mut(id).expect("classic round timer").start();
    }
    assert_eq!(session.schedules().count(), 2);

    session.teardown();
    assert_eq!(session.schedules().count(), 0);
}
