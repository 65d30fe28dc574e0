//! Executes fixtures against the engine and collects mismatches.

use clause_risk::{AnalysisEngine, AnalysisResult};

use crate::errors::SpecResult;
use crate::fixture::{Expectation, SpecFixture};

/// One field-level disagreement between a fixture expectation and the
/// engine's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Label of the expectation being checked.
    pub expectation: String,
    /// Field that disagreed ("presence", "score", "tier", ...).
    pub field: String,
    pub expected: String,
    pub actual: String,
}

/// Result of running one fixture.
#[derive(Debug, Clone)]
pub struct FixtureOutcome {
    /// Relative fixture path, as reported by the loader.
    pub fixture: String,
    pub mismatches: Vec<Mismatch>,
}

impl FixtureOutcome {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Run `fixture` through `engine` and check every expectation.
pub fn run_fixture(
    engine: &AnalysisEngine,
    name: &str,
    fixture: &SpecFixture,
) -> SpecResult<FixtureOutcome> {
    let report = engine.analyze(&fixture.text, &fixture.role);
    let mut mismatches = Vec::new();

    if let Some(total) = fixture.total {
        if report.results.len() != total {
            mismatches.push(Mismatch {
                expectation: "(fixture)".to_string(),
                field: "total".to_string(),
                expected: total.to_string(),
                actual: report.results.len().to_string(),
            });
        }
    }

    for expectation in &fixture.expectations {
        check_expectation(expectation, &report.results, &mut mismatches)?;
    }

    Ok(FixtureOutcome {
        fixture: name.to_string(),
        mismatches,
    })
}

fn check_expectation(
    expectation: &Expectation,
    results: &[AnalysisResult],
    mismatches: &mut Vec<Mismatch>,
) -> SpecResult<()> {
    let result = match results
        .iter()
        .find(|r| r.clause_label == expectation.label)
    {
        Some(result) => result,
        None => {
            mismatches.push(Mismatch {
                expectation: expectation.label.clone(),
                field: "presence".to_string(),
                expected: "a result with this label".to_string(),
                actual: "no such result".to_string(),
            });
            return Ok(());
        }
    };

    if let Some(rule_id) = &expectation.rule_id {
        let actual = result.source_rule_id.as_deref().unwrap_or("(none)");
        if actual != rule_id {
            mismatches.push(mismatch(expectation, "rule_id", rule_id, actual));
        }
    }

    if let Some(score) = expectation.score {
        if result.score != score {
            mismatches.push(mismatch(
                expectation,
                "score",
                &score.to_string(),
                &result.score.to_string(),
            ));
        }
    }

    if let Some(tier) = expectation.expected_tier()? {
        if result.risk_tier != tier {
            mismatches.push(mismatch(
                expectation,
                "tier",
                &format!("{:?}", tier),
                &format!("{:?}", result.risk_tier),
            ));
        }
    }

    if let Some(reference) = &expectation.law_reference {
        if !result.legal_references.iter().any(|r| r == reference) {
            mismatches.push(mismatch(
                expectation,
                "law_reference",
                reference,
                &result.legal_references.join("; "),
            ));
        }
    }

    if let Some(needle) = &expectation.excerpt_contains {
        if !result.excerpt.contains(needle.as_str()) {
            mismatches.push(mismatch(expectation, "excerpt", needle, &result.excerpt));
        }
    }

    if let Some(needle) = &expectation.context_contains {
        if !result.context_text.contains(needle.as_str()) {
            mismatches.push(mismatch(
                expectation,
                "context",
                needle,
                &result.context_text,
            ));
        }
    }

    Ok(())
}

fn mismatch(expectation: &Expectation, field: &str, expected: &str, actual: &str) -> Mismatch {
    Mismatch {
        expectation: expectation.label.clone(),
        field: field.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}
