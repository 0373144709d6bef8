//! Catalog load helpers with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;

use crate::core::types::Problem;

const V1_SCHEMA: &str = include_str!("../../schemas/catalog/v1.schema.json");
const BUILTIN_PROBLEMS: &str = include_str!("../../data/problems.json");

/// An ordered, id-addressable set of problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    problems: Vec<Problem>,
}

impl Catalog {
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Look up a problem by id. "Not found" is the caller's to handle; the
    /// visualization core is never invoked without a resolved problem.
    pub fn get(&self, id: &str) -> Option<&Problem> {
        self.problems.iter().find(|problem| problem.id == id)
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

/// The catalog compiled into the binary.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_catalog(BUILTIN_PROBLEMS).context("parse builtin catalog")
}

/// Load and validate a catalog from disk (schema + invariants).
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read catalog {}", path.display()))?;
    parse_catalog(&contents).with_context(|| format!("load catalog {}", path.display()))
}

fn parse_catalog(contents: &str) -> Result<Catalog> {
    let value: Value = serde_json::from_str(contents).context("parse catalog json")?;
    validate_schema(&value)?;
    let problems: Vec<Problem> =
        serde_json::from_value(value).context("deserialize catalog problems")?;
    let errors = validate_invariants(&problems);
    if !errors.is_empty() {
        return Err(anyhow!("catalog invariants failed: {}", errors.join("; ")));
    }
    Ok(Catalog { problems })
}

fn validate_schema(catalog: &Value) -> Result<()> {
    let schema_value: Value = serde_json::from_str(V1_SCHEMA).context("parse catalog schema")?;
    let compiled =
        validator_for(&schema_value).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(catalog) {
        let messages = compiled
            .iter_errors(catalog)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "catalog schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

/// Check semantic invariants not expressible in JSON Schema:
/// - No duplicate ids
/// - No duplicate titles
pub fn validate_invariants(problems: &[Problem]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();
    let mut seen_titles = std::collections::HashSet::new();

    for problem in problems {
        if !seen_ids.insert(problem.id.as_str()) {
            errors.push(format!("duplicate id '{}'", problem.id));
        }
        if !seen_titles.insert(problem.title.as_str()) {
            errors.push(format!("duplicate title '{}'", problem.title));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::family::StepFamily;

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let catalog = builtin_catalog().expect("builtin catalog");
        assert!(!catalog.is_empty());
        assert!(catalog.get("1").is_some());
    }

    #[test]
    fn builtin_catalog_covers_every_step_family() {
        let catalog = builtin_catalog().expect("builtin catalog");
        let families: Vec<StepFamily> = catalog
            .problems()
            .iter()
            .map(StepFamily::classify)
            .collect();
        assert!(families.contains(&StepFamily::ArrayTwoPointer));
        assert!(families.contains(&StepFamily::GraphBfs));
        assert!(families.contains(&StepFamily::Generic));
    }

    #[test]
    fn unknown_id_returns_none() {
        let catalog = builtin_catalog().expect("builtin catalog");
        assert!(catalog.get("no-such-problem").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let contents = r#"[
            {"id": "1", "title": "A", "difficulty": "easy", "topics": [],
             "test_cases": [{"input": "x", "expected": "y"}]},
            {"id": "1", "title": "B", "difficulty": "easy", "topics": [],
             "test_cases": [{"input": "x", "expected": "y"}]}
        ]"#;
        let err = parse_catalog(contents).expect_err("duplicate ids must fail");
        assert!(err.to_string().contains("duplicate id '1'"));
    }

    #[test]
    fn schema_rejects_unknown_difficulty() {
        let contents = r#"[
            {"id": "1", "title": "A", "difficulty": "expert", "topics": [],
             "test_cases": [{"input": "x", "expected": "y"}]}
        ]"#;
        assert!(parse_catalog(contents).is_err());
    }

    #[test]
    fn load_catalog_round_trips_through_disk() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("problems.json");
        fs::write(&path, BUILTIN_PROBLEMS).expect("write catalog");

        let loaded = load_catalog(&path).expect("load catalog");
        assert_eq!(loaded, builtin_catalog().expect("builtin catalog"));
    }
}
