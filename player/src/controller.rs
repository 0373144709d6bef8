//! Playback controller: state machine plus tick scheduling.
//!
//! The controller owns one step sequence, its [`PlaybackState`], and at most
//! one pending tick deadline. Hosts sleep until [`time_until_tick`] elapses
//! and then call [`poll`], which fires every due tick. `pause`, `set_speed`,
//! and sequence replacement cancel or reschedule the deadline by assignment,
//! so a tick scheduled against an old sequence or speed can never fire.
//!
//! [`time_until_tick`]: PlaybackController::time_until_tick
//! [`poll`]: PlaybackController::poll

use std::time::{Duration, Instant};

use tracing::debug;

use crate::clock::Clock;
use crate::core::playback::{PlaybackState, Tick, tick_period};
use crate::core::types::ExecutionStep;

/// Drives a step sequence under user control or on a timer.
///
/// One controller instance per problem view; replacing the problem's steps
/// goes through [`replace_steps`](Self::replace_steps), which resets position
/// and playback before accepting the new sequence.
pub struct PlaybackController<C: Clock> {
    steps: Vec<ExecutionStep>,
    state: PlaybackState,
    next_tick_at: Option<Instant>,
    clock: C,
}

impl<C: Clock> PlaybackController<C> {
    pub fn new(steps: Vec<ExecutionStep>, clock: C) -> Self {
        Self {
            steps,
            state: PlaybackState::default(),
            next_tick_at: None,
            clock,
        }
    }

    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn speed(&self) -> u8 {
        self.state.speed
    }

    /// The step at the current position, or `None` for an empty sequence.
    pub fn current_step(&self) -> Option<&ExecutionStep> {
        self.steps.get(self.state.current_index)
    }

    /// Jump to `index`, clamped into range. Does not affect playback.
    pub fn seek_to(&mut self, index: usize) {
        self.state.seek_to(self.steps.len(), index);
    }

    /// Advance one step; no-op at the end.
    pub fn step_forward(&mut self) {
        self.state.step_forward(self.steps.len());
    }

    /// Go back one step; no-op at the start.
    pub fn step_backward(&mut self) {
        self.state.step_backward();
    }

    /// Start timed playback. Restarts from the top when already at the end;
    /// no-op on an empty sequence.
    pub fn play(&mut self) {
        if self.state.play(self.steps.len()) {
            let deadline = self.clock.now() + tick_period(self.state.speed);
            self.next_tick_at = Some(deadline);
            debug!(index = self.state.current_index, speed = self.state.speed, "playback started");
        }
    }

    /// Stop timed playback and cancel the pending tick. Idempotent.
    pub fn pause(&mut self) {
        self.state.pause();
        self.next_tick_at = None;
    }

    /// Change the speed, clamped to the supported range. While playing, the
    /// pending tick is rescheduled at the new period.
    pub fn set_speed(&mut self, speed: u8) {
        self.state.set_speed(speed);
        if self.state.is_playing {
            self.next_tick_at = Some(self.clock.now() + tick_period(self.state.speed));
            debug!(speed = self.state.speed, "tick rescheduled");
        }
    }

    /// Swap in a new step sequence (new problem). Resets the position to 0,
    /// stops playback, and cancels any pending tick first.
    pub fn replace_steps(&mut self, steps: Vec<ExecutionStep>) {
        self.pause();
        self.state.current_index = 0;
        self.steps = steps;
    }

    /// Time remaining until the pending tick, if one is scheduled. Zero when
    /// the deadline has already passed.
    pub fn time_until_tick(&self) -> Option<Duration> {
        let deadline = self.next_tick_at?;
        Some(
            deadline
                .checked_duration_since(self.clock.now())
                .unwrap_or(Duration::ZERO),
        )
    }

    /// Fire every tick whose deadline has passed. Returns how many ticks
    /// advanced the position.
    ///
    /// Successive deadlines are derived from the previous deadline, not from
    /// "now", so a host that wakes late neither skips nor duplicates ticks.
    pub fn poll(&mut self) -> u32 {
        let mut fired = 0;
        while self.state.is_playing {
            let Some(deadline) = self.next_tick_at else {
                break;
            };
            if self.clock.now() < deadline {
                break;
            }
            match self.state.tick(self.steps.len()) {
                Tick::Advanced => {
                    fired += 1;
                    self.next_tick_at = Some(deadline + tick_period(self.state.speed));
                }
                Tick::Finished => {
                    fired += 1;
                    self.next_tick_at = None;
                    debug!(index = self.state.current_index, "playback finished");
                }
                Tick::Stopped => {
                    self.next_tick_at = None;
                }
            }
        }
        fired
    }
}
