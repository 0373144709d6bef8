//! Submission history records, filtering, and performance aggregation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_SUBMISSIONS: &str = include_str!("../data/submissions.json");

/// Judge verdict for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    RuntimeError,
}

/// One historical submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: String,
    pub problem_id: String,
    pub problem_title: String,
    /// RFC 3339 UTC timestamp; lexicographic order equals chronological order.
    pub timestamp: String,
    pub status: SubmissionStatus,
    /// Absent when the run never finished (e.g. time limit exceeded).
    pub runtime_ms: Option<u32>,
    pub memory_mb: Option<f64>,
    pub language: String,
    pub code: String,
}

/// Query-string filters for the submission list. All present filters must
/// match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionFilter {
    pub status: Option<SubmissionStatus>,
    /// Case-insensitive substring of the problem title.
    pub title: Option<String>,
    /// Keep submissions at or after this RFC 3339 timestamp.
    pub since: Option<String>,
}

/// Apply a filter, preserving input order.
pub fn filter_submissions<'a>(
    submissions: &'a [SubmissionRecord],
    filter: &SubmissionFilter,
) -> Vec<&'a SubmissionRecord> {
    submissions
        .iter()
        .filter(|submission| {
            if let Some(status) = filter.status
                && submission.status != status
            {
                return false;
            }
            if let Some(title) = &filter.title
                && !submission
                    .problem_title
                    .to_lowercase()
                    .contains(&title.to_lowercase())
            {
                return false;
            }
            if let Some(since) = &filter.since
                && submission.timestamp.as_str() < since.as_str()
            {
                return false;
            }
            true
        })
        .collect()
}

/// Aggregates displayed above the submission list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceSummary {
    pub total: usize,
    pub accepted: usize,
    /// Rounded to a whole percent; 0 when there are no submissions.
    pub acceptance_rate_pct: u32,
    /// Mean over submissions with a numeric runtime; absent when none have one.
    pub avg_runtime_ms: Option<u32>,
}

/// Summarize a submission set.
pub fn summarize(submissions: &[SubmissionRecord]) -> PerformanceSummary {
    let total = submissions.len();
    let accepted = submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::Accepted)
        .count();
    let acceptance_rate_pct = if total > 0 {
        ((accepted as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    let runtimes: Vec<u32> = submissions.iter().filter_map(|s| s.runtime_ms).collect();
    let avg_runtime_ms = if runtimes.is_empty() {
        None
    } else {
        let sum: u64 = runtimes.iter().map(|r| u64::from(*r)).sum();
        Some((sum as f64 / runtimes.len() as f64).round() as u32)
    };

    PerformanceSummary {
        total,
        accepted,
        acceptance_rate_pct,
        avg_runtime_ms,
    }
}

/// Load submissions from a JSON file, or the built-in mock history when no
/// path is configured.
pub fn load_submissions(path: Option<&Path>) -> Result<Vec<SubmissionRecord>> {
    let contents = match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        None => BUILTIN_SUBMISSIONS.to_string(),
    };
    serde_json::from_str(&contents).context("parse submissions json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Vec<SubmissionRecord> {
        load_submissions(None).expect("builtin submissions")
    }

    #[test]
    fn builtin_history_parses() {
        let submissions = builtin();
        assert_eq!(submissions.len(), 5);
    }

    #[test]
    fn status_and_title_filters_compose() {
        let submissions = builtin();
        let filter = SubmissionFilter {
            status: Some(SubmissionStatus::Accepted),
            title: Some("two sum".to_string()),
            since: None,
        };
        let matched = filter_submissions(&submissions, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "sub-1");
    }

    #[test]
    fn since_filter_is_inclusive_lexicographic() {
        let submissions = builtin();
        let filter = SubmissionFilter {
            since: Some("2023-11-22T10:30:00Z".to_string()),
            ..SubmissionFilter::default()
        };
        let matched = filter_submissions(&submissions, &filter);
        let ids: Vec<&str> = matched.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sub-1", "sub-2", "sub-3"]);
    }

    #[test]
    fn summary_matches_the_mock_history() {
        let summary = summarize(&builtin());
        assert_eq!(summary.total, 5);
        assert_eq!(summary.accepted, 3);
        assert_eq!(summary.acceptance_rate_pct, 60);
        // Runtimes 56, 58, 68, 72 (sub-4 has none): mean 63.5 rounds to 64.
        assert_eq!(summary.avg_runtime_ms, Some(64));
    }

    #[test]
    fn summary_of_empty_history_has_no_average() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.acceptance_rate_pct, 0);
        assert_eq!(summary.avg_runtime_ms, None);
    }
}
