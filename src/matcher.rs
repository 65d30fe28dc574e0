//! Per-pattern matching with graceful degradation.
//!
//! Catalogue patterns are authored by operators, not users, but an authoring
//! mistake must never abort a run. Each pattern evaluation therefore yields a
//! three-way [`PatternOutcome`] consumed by the engine's rule loop: a match,
//! no match, or a compile error to log and skip.

use regex::RegexBuilder;

/// A successful pattern hit. Offsets are byte positions into the text the
/// pattern was evaluated against (the normalized contract text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub start: usize,
    pub end: usize,
    /// The substring the pattern matched, as it appears in the text.
    pub matched: String,
}

/// Outcome of evaluating one pattern against one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternOutcome {
    Match(PatternMatch),
    NoMatch,
    /// The pattern failed to compile. Carries the regex error text for the
    /// engine's log line; never user-visible.
    CompileError(String),
}

/// Evaluates catalogue patterns case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternMatcher;

impl PatternMatcher {
    pub fn new() -> Self {
        PatternMatcher
    }

    /// Find the first occurrence of `pattern` anywhere in `text`.
    pub fn first_match(&self, pattern: &str, text: &str) -> PatternOutcome {
        let regex = match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(regex) => regex,
            Err(err) => return PatternOutcome::CompileError(err.to_string()),
        };

        match regex.find(text) {
            Some(found) => PatternOutcome::Match(PatternMatch {
                start: found.start(),
                end: found.end(),
                matched: found.as_str().to_string(),
            }),
            None => PatternOutcome::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_offsets() {
        let matcher = PatternMatcher::new();
        let outcome = matcher.first_match("multa", "sujeito a multa de 10%");
        assert_eq!(
            outcome,
            PatternOutcome::Match(PatternMatch {
                start: 10,
                end: 15,
                matched: "multa".to_string(),
            })
        );
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = PatternMatcher::new();
        let outcome = matcher.first_match("rescindir", "NÃO PODERÁ RESCINDIR");
        assert!(matches!(outcome, PatternOutcome::Match(_)));
    }

    #[test]
    fn test_no_match() {
        let matcher = PatternMatcher::new();
        assert_eq!(
            matcher.first_match("inexistente", "texto qualquer"),
            PatternOutcome::NoMatch
        );
    }

    #[test]
    fn test_malformed_pattern_reports_compile_error() {
        let matcher = PatternMatcher::new();
        assert!(matches!(
            matcher.first_match("multa (de", "multa de 10%"),
            PatternOutcome::CompileError(_)
        ));
    }

    #[test]
    fn test_wildcard_spans_phrase() {
        let matcher = PatternMatcher::new();
        let outcome = matcher.first_match(
            "não poderá rescindir.*sob nenhuma hipótese",
            "a empresa não poderá rescindir o contrato sob nenhuma hipótese.",
        );
        match outcome {
            PatternOutcome::Match(m) => {
                assert_eq!(
                    m.matched,
                    "não poderá rescindir o contrato sob nenhuma hipótese"
                );
            }
            other => panic!("expected match, got {:?}", other),
        }
    }
}
