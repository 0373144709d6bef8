//! Shared deterministic types for the visualization core.
//!
//! These types define stable contracts between the step generator, the
//! playback controller, and rendering collaborators. They must not depend on
//! external state or I/O and must remain deterministic across runs.

use serde::{Deserialize, Serialize};

/// Difficulty rating attached to a catalog problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

/// One sample test case attached to a problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected: String,
}

/// A catalog problem. Consumed read-only by the generator.
///
/// `topics` may be empty; the generator then falls through to its generic
/// sequence and still terminates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub topics: Vec<String>,
    pub test_cases: Vec<TestCase>,
}

/// A labeled pointer into an array visualization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    pub index: usize,
    pub label: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub highlight: bool,
}

/// A node in a graph visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub highlight: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub visited: bool,
}

/// A directed edge in a graph visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: u32,
    pub target: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub highlight: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub visited: bool,
}

/// Payload handed to renderers, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Visualization {
    Array {
        data: Vec<i64>,
        pointers: Vec<Pointer>,
    },
    Graph {
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
    },
    Basic {
        value: String,
    },
}

/// One discrete step of a visualized execution.
///
/// Ordering is significant: index 0 is the initial state, the last index is
/// terminal. Steps are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    pub description: String,
    pub code: String,
    pub visualization: Visualization,
}

fn is_false(value: &bool) -> bool {
    !*value
}
