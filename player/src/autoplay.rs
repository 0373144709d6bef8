//! Blocking drive loop for timed playback.
//!
//! Hosts that own a thread (the CLI `play` command) hand the controller to
//! [`run_autoplay`] together with a frame observer and a wait function. The
//! loop sleeps until the controller's next deadline, polls, and reports each
//! position change; it returns once playback auto-stops at the end.

use std::time::Duration;

use crate::clock::Clock;
use crate::controller::PlaybackController;
use crate::core::types::ExecutionStep;

/// Summary of one autoplay run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayOutcome {
    /// Frames handed to the observer, including the initial one.
    pub frames_emitted: u32,
    /// Position when playback stopped.
    pub final_index: usize,
}

/// Play the controller's sequence from its current position to the end.
///
/// `on_frame` receives `(index, step)` for the starting position and then
/// for every position change. `wait` blocks for the given duration;
/// injecting it keeps the loop free of direct sleeps.
pub fn run_autoplay<C, F, W>(
    controller: &mut PlaybackController<C>,
    mut on_frame: F,
    mut wait: W,
) -> AutoplayOutcome
where
    C: Clock,
    F: FnMut(usize, &ExecutionStep),
    W: FnMut(Duration),
{
    let mut frames_emitted = 0;

    controller.play();
    if let Some(step) = controller.current_step() {
        on_frame(controller.current_index(), step);
        frames_emitted += 1;
    }

    while controller.is_playing() {
        if let Some(remaining) = controller.time_until_tick() {
            if !remaining.is_zero() {
                wait(remaining);
            }
        }
        if controller.poll() > 0 {
            if let Some(step) = controller.current_step() {
                on_frame(controller.current_index(), step);
                frames_emitted += 1;
            }
        }
    }

    AutoplayOutcome {
        frames_emitted,
        final_index: controller.current_index(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate::generate;
    use crate::test_support::{ManualClock, problem_with_topics};

    #[test]
    fn autoplay_visits_every_step_exactly_once() {
        let clock = ManualClock::new();
        let steps = generate(&problem_with_topics(&["Array"]));
        let mut controller = PlaybackController::new(steps, clock.clone());
        controller.set_speed(100);

        let mut seen = Vec::new();
        let wait_clock = clock.clone();
        let outcome = run_autoplay(
            &mut controller,
            |index, _step| seen.push(index),
            |duration| wait_clock.advance(duration),
        );

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(outcome.frames_emitted, 5);
        assert_eq!(outcome.final_index, 4);
        assert!(!controller.is_playing());
    }

    #[test]
    fn autoplay_on_empty_sequence_emits_nothing() {
        let clock = ManualClock::new();
        let mut controller = PlaybackController::new(Vec::new(), clock.clone());

        let wait_clock = clock.clone();
        let outcome = run_autoplay(
            &mut controller,
            |_, _| panic!("no frames expected"),
            |duration| wait_clock.advance(duration),
        );

        assert_eq!(outcome.frames_emitted, 0);
        assert_eq!(outcome.final_index, 0);
    }

    #[test]
    fn autoplay_restarts_when_already_at_the_end() {
        let clock = ManualClock::new();
        let steps = generate(&problem_with_topics(&[]));
        let mut controller = PlaybackController::new(steps, clock.clone());
        controller.set_speed(100);
        controller.seek_to(3);

        let mut seen = Vec::new();
        let wait_clock = clock.clone();
        run_autoplay(
            &mut controller,
            |index, _step| seen.push(index),
            |duration| wait_clock.advance(duration),
        );

        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
