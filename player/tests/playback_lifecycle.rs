//! Lifecycle tests driving the playback controller through full scenarios
//! under simulated time: timed runs to completion, pause/cancel behavior,
//! mid-flight speed changes, and sequence replacement.

use std::time::Duration;

use player::controller::PlaybackController;
use player::core::generate::generate;
use player::core::playback::tick_period;
use player::test_support::{ManualClock, problem_with_topics};

/// Full timed run for an array problem at top speed.
///
/// Speed 100 means a 500ms period. After 2000ms of simulated time the
/// controller has advanced through all four remaining steps, sits clamped on
/// the last index, and has auto-stopped rather than looping.
#[test]
fn timed_run_reaches_the_end_and_stops() {
    let clock = ManualClock::new();
    let steps = generate(&problem_with_topics(&["Array"]));
    let mut controller = PlaybackController::new(steps, clock.clone());
    controller.set_speed(100);
    controller.play();
    assert_eq!(tick_period(controller.speed()), Duration::from_millis(500));

    clock.advance(Duration::from_millis(2000));
    controller.poll();

    assert_eq!(controller.current_index(), 4);
    assert!(!controller.is_playing());

    // More elapsed time must not wrap playback around.
    clock.advance(Duration::from_millis(2000));
    controller.poll();
    assert_eq!(controller.current_index(), 4);
    assert!(!controller.is_playing());
}

/// Manual stepping never wraps at either end of the sequence.
#[test]
fn manual_stepping_clamps_at_both_ends() {
    let clock = ManualClock::new();
    let steps = generate(&problem_with_topics(&[]));
    let mut controller = PlaybackController::new(steps, clock);

    for _ in 0..10 {
        controller.step_forward();
    }
    assert_eq!(controller.current_index(), 3);

    for _ in 0..10 {
        controller.step_backward();
    }
    assert_eq!(controller.current_index(), 0);
}

/// A paused controller fires no further advances, no matter how much time
/// passes after the pause.
#[test]
fn pause_prevents_all_later_ticks() {
    let clock = ManualClock::new();
    let steps = generate(&problem_with_topics(&["Graph"]));
    let mut controller = PlaybackController::new(steps, clock.clone());
    controller.set_speed(100);
    controller.play();

    clock.advance(tick_period(100));
    controller.poll();
    assert_eq!(controller.current_index(), 1);

    controller.pause();
    clock.advance(Duration::from_millis(10_000));
    assert_eq!(controller.poll(), 0);
    assert_eq!(controller.current_index(), 1);
    assert!(!controller.is_playing());

    // Pause is idempotent.
    controller.pause();
    assert!(!controller.is_playing());
}

/// Changing speed mid-flight reschedules the single pending tick: the old
/// deadline never fires, the new one fires exactly once per new period.
#[test]
fn speed_change_mid_flight_keeps_a_single_timer() {
    let clock = ManualClock::new();
    let steps = generate(&problem_with_topics(&["Array"]));
    let mut controller = PlaybackController::new(steps, clock.clone());
    controller.set_speed(1);
    controller.play();

    // Before the slow 4955ms deadline arrives, switch to the fast period.
    clock.advance(Duration::from_millis(1000));
    controller.set_speed(100);

    // The old deadline (4955ms) passing alone fires nothing extra; exactly
    // one tick per 500ms of the new period fires from the reschedule point.
    clock.advance(Duration::from_millis(500));
    assert_eq!(controller.poll(), 1);
    assert_eq!(controller.current_index(), 1);

    clock.advance(Duration::from_millis(500));
    assert_eq!(controller.poll(), 1);
    assert_eq!(controller.current_index(), 2);
}

/// Replaying after completion restarts from the top.
#[test]
fn play_after_completion_restarts_from_the_top() {
    let clock = ManualClock::new();
    let steps = generate(&problem_with_topics(&["Array"]));
    let mut controller = PlaybackController::new(steps, clock.clone());
    controller.set_speed(100);
    controller.play();

    clock.advance(Duration::from_millis(2000));
    controller.poll();
    assert_eq!(controller.current_index(), 4);

    controller.play();
    assert_eq!(controller.current_index(), 0);
    assert!(controller.is_playing());

    clock.advance(tick_period(100));
    controller.poll();
    assert_eq!(controller.current_index(), 1);
}

/// Switching problems resets position and playback, and a deadline scheduled
/// against the old sequence can never mutate the new one.
#[test]
fn problem_switch_discards_stale_timers() {
    let clock = ManualClock::new();
    let steps = generate(&problem_with_topics(&["Graph"]));
    let mut controller = PlaybackController::new(steps, clock.clone());
    controller.set_speed(100);
    controller.play();
    clock.advance(tick_period(100));
    controller.poll();
    assert_eq!(controller.current_index(), 1);

    controller.replace_steps(generate(&problem_with_topics(&[])));
    assert_eq!(controller.current_index(), 0);
    assert!(!controller.is_playing());

    clock.advance(Duration::from_millis(10_000));
    assert_eq!(controller.poll(), 0);
    assert_eq!(controller.current_index(), 0);

    // The new sequence still plays normally afterwards.
    controller.play();
    clock.advance(tick_period(100));
    controller.poll();
    assert_eq!(controller.current_index(), 1);
}

/// An empty sequence accepts every operation as a no-op and exposes no step.
#[test]
fn empty_sequence_tolerates_every_operation() {
    let clock = ManualClock::new();
    let mut controller = PlaybackController::new(Vec::new(), clock.clone());

    controller.seek_to(5);
    controller.step_forward();
    controller.step_backward();
    controller.play();
    controller.set_speed(100);

    assert_eq!(controller.current_index(), 0);
    assert!(!controller.is_playing());
    assert!(controller.current_step().is_none());

    clock.advance(Duration::from_millis(10_000));
    assert_eq!(controller.poll(), 0);
}
