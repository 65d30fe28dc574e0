//! Detection rule definitions.
//!
//! A [`Rule`] pairs one or more regex patterns with a fixed severity score,
//! a human-readable explanation, remediation advice, and the legal references
//! backing the finding. Rules are authored once per role in the catalogue and
//! never modified at runtime.

use serde::{Deserialize, Serialize};

/// Coarse risk bucket derived from a rule's severity score.
///
/// The thresholds are fixed: `score >= 8` is [`RiskTier::High`],
/// `5 <= score < 8` is [`RiskTier::Medium`], anything below is
/// [`RiskTier::Low`]. The tier is derived at construction so a rule can
/// never carry an inconsistent score/tier pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Bucket a severity score (0-10) into a tier.
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            RiskTier::High
        } else if score >= 5 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}

/// An authored detection unit.
///
/// Patterns are tried in order against the normalized (lower-cased) contract
/// text; the first pattern that matches anywhere produces the rule's single
/// finding. Patterns are therefore authored in lower case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Role-scoped slug, e.g. `"consumidor/cancelamento"`.
    pub id: String,
    /// Display label for the detected clause.
    pub name: String,
    /// Regex patterns, tried in order. First match wins.
    pub patterns: Vec<String>,
    /// Severity score, 0-10.
    pub score: u8,
    /// Derived from `score`, see [`RiskTier::from_score`].
    pub risk_tier: RiskTier,
    /// Why this clause deserves attention (Portuguese prose).
    pub explanation: String,
    /// What the reader should do about it (Portuguese prose).
    pub remediation: String,
    /// Statutes backing the finding, e.g. `"CDC Art. 51, IV"`.
    pub legal_references: Vec<String>,
    /// Topic tags for grouping in display surfaces.
    pub tags: Vec<String>,
}

impl Rule {
    /// Construct a rule. The score is clamped to 10 and the risk tier is
    /// derived from it.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        name: &str,
        patterns: &[&str],
        score: u8,
        explanation: &str,
        remediation: &str,
        legal_references: &[&str],
        tags: &[&str],
    ) -> Self {
        let score = score.min(10);
        Rule {
            id: id.to_string(),
            name: name.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            score,
            risk_tier: RiskTier::from_score(score),
            explanation: explanation.to_string(),
            remediation: remediation.to_string(),
            legal_references: legal_references.iter().map(|r| r.to_string()).collect(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(RiskTier::from_score(0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(4), RiskTier::Low);
        assert_eq!(RiskTier::from_score(5), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(7), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(8), RiskTier::High);
        assert_eq!(RiskTier::from_score(10), RiskTier::High);
    }

    #[test]
    fn test_tier_derived_at_construction() {
        let rule = Rule::new(
            "teste/exemplo",
            "Exemplo",
            &["padrão"],
            8,
            "Explicação.",
            "Solução.",
            &["CDC Art. 51"],
            &["teste"],
        );
        assert_eq!(rule.risk_tier, RiskTier::High);
    }

    #[test]
    fn test_score_clamped() {
        let rule = Rule::new("t/x", "X", &["x"], 99, "", "", &[], &[]);
        assert_eq!(rule.score, 10);
        assert_eq!(rule.risk_tier, RiskTier::High);
    }
}
