//! Human-readable reporting for harness runs.

use crate::failures::HarnessResult;
use crate::runner::{FixtureOutcome, Mismatch};

/// Format one failed fixture with its field-level mismatches.
pub fn format_failure(outcome: &FixtureOutcome) -> String {
    let mut out = format!("FAIL {}\n", outcome.fixture);
    for mismatch in &outcome.mismatches {
        out.push_str(&format_mismatch(mismatch));
    }
    out
}

fn format_mismatch(mismatch: &Mismatch) -> String {
    format!(
        "  [{}] {}\n    expected: {}\n    actual:   {}\n",
        mismatch.expectation, mismatch.field, mismatch.expected, mismatch.actual
    )
}

/// One-line summary of a harness run.
pub fn format_summary(result: &HarnessResult) -> String {
    format!(
        "{} checked, {} passed, {} expected failures, {} regressions",
        result.total, result.passed, result.expected_failures, result.regressions
    )
}
