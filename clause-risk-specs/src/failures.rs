//! Expected failures tracking via TOML file.
//!
//! Lets the harness distinguish known catalogue gaps from regressions: a
//! failing fixture listed in the ledger is reported but does not fail the
//! run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Relative fixture path, e.g. "consumidor-cancelamento.toml".
    pub fixture: String,
    /// Label of the failing expectation within the fixture.
    pub expectation: String,
    /// Human-readable reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means an empty ledger.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Classify a failure of `expectation` within `fixture`.
    pub fn is_expected(&self, fixture: &str, expectation: &str) -> FailureState {
        for entry in &self.known {
            if entry.fixture == fixture && entry.expectation == expectation {
                return FailureState::Known;
            }
        }

        for entry in &self.pending {
            if entry.fixture == fixture && entry.expectation == expectation {
                return FailureState::Pending;
            }
        }

        FailureState::Regression
    }

    /// Count total expected failures.
    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }
}

/// Result of running the harness.
#[derive(Debug, Clone, Default)]
pub struct HarnessResult {
    /// Total fixture expectations checked.
    pub total: usize,
    /// Passed checks.
    pub passed: usize,
    /// Expected failures (known + pending).
    pub expected_failures: usize,
    /// Regressions (unexpected failures).
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all tests passed (no regressions).
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    /// Record a passed check.
    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Record a failed check with its state.
    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => {
                self.expected_failures += 1;
            }
            FailureState::Regression => {
                self.regressions += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty() {
        let failures = ExpectedFailures::default();
        assert_eq!(failures.count(), 0);
    }

    #[test]
    fn test_unlisted_failure_is_regression() {
        let failures = ExpectedFailures::default();
        assert_eq!(
            failures.is_expected("fixture.toml", "Qualquer cláusula"),
            FailureState::Regression
        );
    }

    #[test]
    fn test_known_and_pending_states() {
        let failures = ExpectedFailures {
            known: vec![FailureEntry {
                fixture: "a.toml".to_string(),
                expectation: "Cláusula A".to_string(),
                reason: Some("limitação conhecida".to_string()),
                added: None,
            }],
            pending: vec![FailureEntry {
                fixture: "b.toml".to_string(),
                expectation: "Cláusula B".to_string(),
                reason: None,
                added: Some("2026-08-01".to_string()),
            }],
        };

        assert_eq!(
            failures.is_expected("a.toml", "Cláusula A"),
            FailureState::Known
        );
        assert_eq!(
            failures.is_expected("b.toml", "Cláusula B"),
            FailureState::Pending
        );
        assert_eq!(
            failures.is_expected("a.toml", "Cláusula B"),
            FailureState::Regression
        );
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[pending]]
fixture = "consumidor-renovacao.toml"
expectation = "Renovação automática sem aviso"
reason = "padrão em revisão"
added = "2026-08-01"

[[known]]
fixture = "empresario-aval.toml"
expectation = "Garantia pessoal dos sócios"
reason = "depende de heurística nova"
"#
        )
        .unwrap();

        let failures = ExpectedFailures::load(file.path()).unwrap();
        assert_eq!(failures.count(), 2);
        assert_eq!(
            failures.is_expected("consumidor-renovacao.toml", "Renovação automática sem aviso"),
            FailureState::Pending
        );
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let failures = ExpectedFailures::load(Path::new("/nonexistent/ledger.toml")).unwrap();
        assert_eq!(failures.count(), 0);
    }

    #[test]
    fn test_harness_result_record() {
        let mut result = HarnessResult::new();
        assert!(result.success());

        result.record_pass();
        result.record_failure(FailureState::Known);
        result.record_failure(FailureState::Regression);

        assert_eq!(result.total, 3);
        assert_eq!(result.passed, 1);
        assert_eq!(result.expected_failures, 1);
        assert_eq!(result.regressions, 1);
        assert!(!result.success());
    }
}
