//! Test-only helpers: a manually advanced clock and problem builders.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::clock::Clock;
use crate::core::types::{Difficulty, Problem, TestCase};

/// Clock that only moves when a test advances it.
///
/// Clones share the same timeline, so one handle can drive the controller
/// while another advances time from a wait callback.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Move simulated time forward.
    pub fn advance(&self, duration: Duration) {
        let mut offset = self.offset.lock().expect("clock lock");
        *offset += duration;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = self.offset.lock().expect("clock lock");
        self.base + *offset
    }
}

/// Create a deterministic problem with the given topic tags.
pub fn problem_with_topics(topics: &[&str]) -> Problem {
    Problem {
        id: "p-test".to_string(),
        title: "Test Problem".to_string(),
        difficulty: Difficulty::Easy,
        topics: topics.iter().map(ToString::to_string).collect(),
        test_cases: vec![TestCase {
            input: "input".to_string(),
            expected: "expected".to_string(),
        }],
    }
}
