//! Pure playback state transitions.
//!
//! All operations clamp rather than fail; invalid indices and speeds are
//! silently normalized. Timer ownership lives in the controller; this module
//! only decides what each transition does to the position and play flag.

use std::time::Duration;

use serde::Serialize;

/// Lowest playback speed (slowest stepping).
pub const MIN_SPEED: u8 = 1;
/// Highest playback speed (fastest stepping).
pub const MAX_SPEED: u8 = 100;
/// Speed used when no configuration overrides it.
pub const DEFAULT_SPEED: u8 = 50;

/// Clamp a speed into the supported `[MIN_SPEED, MAX_SPEED]` range.
pub fn clamp_speed(speed: u8) -> u8 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// Time between automatic advances at a given speed.
///
/// Linear mapping `5000ms - speed * 45ms`: speed 1 waits 4955ms per step,
/// speed 100 waits 500ms. Higher speed always means a shorter period.
pub fn tick_period(speed: u8) -> Duration {
    let speed = u64::from(clamp_speed(speed));
    Duration::from_millis(5000 - speed * 45)
}

/// Result of one automatic advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Moved forward one step; playback continues.
    Advanced,
    /// Moved onto the final step; playback stopped.
    Finished,
    /// Nothing left to advance; playback stopped without moving.
    Stopped,
}

/// Position, play flag, and speed for one step sequence.
///
/// `current_index` stays within `[0, len - 1]` whenever the sequence is
/// non-empty, and stays 0 when it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
    pub speed: u8,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            speed: DEFAULT_SPEED,
        }
    }
}

impl PlaybackState {
    pub fn new(speed: u8) -> Self {
        Self {
            speed: clamp_speed(speed),
            ..Self::default()
        }
    }

    /// Jump to `index`, clamped to the valid range. Leaves the play flag
    /// untouched. No-op on an empty sequence.
    pub fn seek_to(&mut self, len: usize, index: usize) {
        if len == 0 {
            return;
        }
        self.current_index = index.min(len - 1);
    }

    /// Advance one step; no-op at the last index (never wraps).
    pub fn step_forward(&mut self, len: usize) {
        if len != 0 && self.current_index + 1 < len {
            self.current_index += 1;
        }
    }

    /// Go back one step; no-op at index 0 (never wraps).
    pub fn step_backward(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Enable playback. Restarts from index 0 when already at the end.
    ///
    /// Returns false (and stays paused) on an empty sequence.
    pub fn play(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        if self.current_index + 1 >= len {
            self.current_index = 0;
        }
        self.is_playing = true;
        true
    }

    /// Disable playback. Idempotent.
    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Update the speed, clamped to `[MIN_SPEED, MAX_SPEED]`.
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = clamp_speed(speed);
    }

    /// One automatic advance. Stops playback when it lands on the final
    /// step, or immediately when there is nowhere left to go.
    pub fn tick(&mut self, len: usize) -> Tick {
        if len == 0 || self.current_index + 1 >= len {
            self.is_playing = false;
            return Tick::Stopped;
        }
        self.current_index += 1;
        if self.current_index + 1 == len {
            self.is_playing = false;
            Tick::Finished
        } else {
            Tick::Advanced
        }
    }
}
