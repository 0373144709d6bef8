//! Deterministic classification of problems into step families.

use crate::core::types::Problem;

/// The closed set of canned sequences the generator can produce.
///
/// Resolved once per problem so the dispatch policy lives in one place
/// instead of being scattered through generation control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepFamily {
    /// Two-pointer walk over a sorted array.
    ArrayTwoPointer,
    /// Breadth-first traversal from a source node.
    GraphBfs,
    /// Topic-agnostic fallback sequence.
    Generic,
}

impl StepFamily {
    /// Classify a problem by its topic tags, first match wins:
    /// `"Array"` before `"Graph"`, anything else is `Generic`.
    ///
    /// A problem tagged with both array and graph topics deliberately plays
    /// the array sequence; the precedence is part of the contract.
    pub fn classify(problem: &Problem) -> Self {
        if problem.topics.iter().any(|topic| topic == "Array") {
            Self::ArrayTwoPointer
        } else if problem.topics.iter().any(|topic| topic == "Graph") {
            Self::GraphBfs
        } else {
            Self::Generic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::problem_with_topics;

    #[test]
    fn array_topic_selects_two_pointer_family() {
        let problem = problem_with_topics(&["Hash Table", "Array"]);
        assert_eq!(StepFamily::classify(&problem), StepFamily::ArrayTwoPointer);
    }

    #[test]
    fn graph_topic_selects_bfs_family() {
        let problem = problem_with_topics(&["Graph", "Topological Sort"]);
        assert_eq!(StepFamily::classify(&problem), StepFamily::GraphBfs);
    }

    #[test]
    fn array_wins_over_graph_when_both_present() {
        let problem = problem_with_topics(&["Graph", "Array"]);
        assert_eq!(StepFamily::classify(&problem), StepFamily::ArrayTwoPointer);
    }

    #[test]
    fn unknown_topics_fall_back_to_generic() {
        let problem = problem_with_topics(&["Dynamic Programming"]);
        assert_eq!(StepFamily::classify(&problem), StepFamily::Generic);
    }

    #[test]
    fn empty_topics_fall_back_to_generic() {
        let problem = problem_with_topics(&[]);
        assert_eq!(StepFamily::classify(&problem), StepFamily::Generic);
    }

    #[test]
    fn topic_match_is_exact_not_substring() {
        let problem = problem_with_topics(&["Arrays", "Graphs"]);
        assert_eq!(StepFamily::classify(&problem), StepFamily::Generic);
    }
}
