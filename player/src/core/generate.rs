//! Canned step sequence generation.
//!
//! The generator is a placeholder for a real tracer: it maps a problem to a
//! fixed, finite sequence of steps whose narrative, code fragment, and
//! visualization payload agree at every index. Each family is generated by
//! its own function so a real tracer can replace one branch without touching
//! the others or the playback controller.

use crate::core::family::StepFamily;
use crate::core::types::{
    ExecutionStep, GraphEdge, GraphNode, Pointer, Problem, Visualization,
};

/// Produce the execution steps for a problem.
///
/// Pure and total: the same problem always yields the same steps, and every
/// problem yields at least the generic sequence.
pub fn generate(problem: &Problem) -> Vec<ExecutionStep> {
    match StepFamily::classify(problem) {
        StepFamily::ArrayTwoPointer => array_two_pointer_steps(),
        StepFamily::GraphBfs => graph_bfs_steps(),
        StepFamily::Generic => generic_steps(),
    }
}

fn step(description: &str, code: &str, visualization: Visualization) -> ExecutionStep {
    ExecutionStep {
        description: description.to_string(),
        code: code.to_string(),
        visualization,
    }
}

fn array_payload(pointers: Vec<Pointer>) -> Visualization {
    Visualization::Array {
        data: vec![2, 7, 11, 15],
        pointers,
    }
}

fn pointer(index: usize, label: &str, highlight: bool) -> Pointer {
    Pointer {
        index,
        label: label.to_string(),
        highlight,
    }
}

/// Two-pointer sum search over a sorted array, ending with both pointers on
/// the matching pair.
fn array_two_pointer_steps() -> Vec<ExecutionStep> {
    vec![
        step(
            "Initialize variables",
            "let result = [];\nlet left = 0, right = nums.length - 1;",
            array_payload(Vec::new()),
        ),
        step(
            "First iteration: check if elements at pointers sum to target",
            "if (nums[left] + nums[right] === target) {\n  return [left, right];\n}",
            array_payload(vec![pointer(0, "left", false), pointer(3, "right", false)]),
        ),
        step(
            "Sum is not target, adjust pointers",
            "if (nums[left] + nums[right] < target) {\n  left++;\n} else {\n  right--;\n}",
            array_payload(vec![pointer(1, "left", false), pointer(3, "right", false)]),
        ),
        step(
            "Check if new elements sum to target",
            "if (nums[left] + nums[right] === target) {\n  return [left, right];\n}",
            array_payload(vec![pointer(1, "left", false), pointer(2, "right", false)]),
        ),
        step(
            "Found solution",
            "return [left, right];",
            array_payload(vec![pointer(1, "left", true), pointer(2, "right", true)]),
        ),
    ]
}

fn node(id: u32, highlight: bool, visited: bool) -> GraphNode {
    GraphNode {
        id,
        highlight,
        visited,
    }
}

fn edge(source: u32, target: u32, highlight: bool, visited: bool) -> GraphEdge {
    GraphEdge {
        source,
        target,
        highlight,
        visited,
    }
}

/// Breadth-first traversal over a four-node path graph, ending with every
/// node and edge marked visited.
fn graph_bfs_steps() -> Vec<ExecutionStep> {
    vec![
        step(
            "Initialize graph representation",
            "const graph = buildAdjList(edges);\nconst visited = new Set();",
            Visualization::Graph {
                nodes: vec![
                    node(0, false, false),
                    node(1, false, false),
                    node(2, false, false),
                    node(3, false, false),
                ],
                edges: vec![
                    edge(0, 1, false, false),
                    edge(1, 2, false, false),
                    edge(2, 3, false, false),
                ],
            },
        ),
        step(
            "Start BFS from source node",
            "const queue = [start];\nvisited.add(start);",
            Visualization::Graph {
                nodes: vec![
                    node(0, true, false),
                    node(1, false, false),
                    node(2, false, false),
                    node(3, false, false),
                ],
                edges: vec![
                    edge(0, 1, false, false),
                    edge(1, 2, false, false),
                    edge(2, 3, false, false),
                ],
            },
        ),
        step(
            "Process neighbors of current node",
            "for (const neighbor of graph[current]) {\n  if (!visited.has(neighbor)) {\n    queue.push(neighbor);\n    visited.add(neighbor);\n  }\n}",
            Visualization::Graph {
                nodes: vec![
                    node(0, false, true),
                    node(1, true, false),
                    node(2, false, false),
                    node(3, false, false),
                ],
                edges: vec![
                    edge(0, 1, true, false),
                    edge(1, 2, false, false),
                    edge(2, 3, false, false),
                ],
            },
        ),
        step(
            "Continue BFS traversal",
            "current = queue.shift();",
            Visualization::Graph {
                nodes: vec![
                    node(0, false, true),
                    node(1, false, true),
                    node(2, true, false),
                    node(3, false, false),
                ],
                edges: vec![
                    edge(0, 1, false, true),
                    edge(1, 2, true, false),
                    edge(2, 3, false, false),
                ],
            },
        ),
        step(
            "Complete traversal",
            "return distance;",
            Visualization::Graph {
                nodes: vec![
                    node(0, false, true),
                    node(1, false, true),
                    node(2, false, true),
                    node(3, false, true),
                ],
                edges: vec![
                    edge(0, 1, false, true),
                    edge(1, 2, false, true),
                    edge(2, 3, false, true),
                ],
            },
        ),
    ]
}

fn basic(value: &str) -> Visualization {
    Visualization::Basic {
        value: value.to_string(),
    }
}

/// Fallback sequence for problems outside the modeled families.
fn generic_steps() -> Vec<ExecutionStep> {
    vec![
        step("Initialize solution", "let result = 0;", basic("result = 0")),
        step(
            "Process input",
            "for (let i = 0; i < input.length; i++) {\n  // Process each element\n}",
            basic("Processing..."),
        ),
        step(
            "Calculate result",
            "result = calculateSolution(input);",
            basic("Calculating..."),
        ),
        step("Return final answer", "return result;", basic("Solution found!")),
    ]
}
