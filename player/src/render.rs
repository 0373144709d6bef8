//! Terminal rendering of execution steps.
//!
//! The playback core hands `(index, step)` pairs to a renderer; this module
//! is the built-in text renderer behind the CLI. Highlighted elements are
//! marked with `*`, visited elements with `visited`.

use std::fmt::Write;

use crate::core::types::{ExecutionStep, Visualization};

/// Render one step as a multi-line block for the terminal.
pub fn render_step(index: usize, total: usize, step: &ExecutionStep, show_code: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[step {}/{}] {}", index + 1, total, step.description);

    if show_code && !step.code.is_empty() {
        for line in step.code.lines() {
            let _ = writeln!(out, "  | {}", line);
        }
    }

    out.push_str(&render_visualization(&step.visualization));
    out
}

/// Render just the visualization payload.
pub fn render_visualization(visualization: &Visualization) -> String {
    let mut out = String::new();
    match visualization {
        Visualization::Array { data, pointers } => {
            let values = data
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  values: [{}]", values);
            for pointer in pointers {
                let mark = if pointer.highlight { " *" } else { "" };
                let _ = writeln!(out, "  {} @ {}{}", pointer.label, pointer.index, mark);
            }
        }
        Visualization::Graph { nodes, edges } => {
            let rendered = nodes
                .iter()
                .map(|node| {
                    let mut label = node.id.to_string();
                    if node.visited {
                        label.push_str(":visited");
                    }
                    if node.highlight {
                        label.push('*');
                    }
                    label
                })
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "  nodes: {}", rendered);
            for edge in edges {
                let mut suffix = String::new();
                if edge.visited {
                    suffix.push_str(" visited");
                }
                if edge.highlight {
                    suffix.push_str(" *");
                }
                let _ = writeln!(out, "  {} -> {}{}", edge.source, edge.target, suffix);
            }
        }
        Visualization::Basic { value } => {
            let _ = writeln!(out, "  >> {}", value);
        }
    }
    out
}
