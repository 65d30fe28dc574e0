//! Analysis results and derived summaries.
//!
//! Besides catalogue-backed findings there are two synthetic sentinel shapes:
//! the error result ("could not analyze") and the no-issues result ("analyzed
//! and clean"). Both score 0 and carry no references; they differ only in
//! their label and explanation wording — downstream code renders them like
//! any other result and never branches on a type flag.

use serde::{Deserialize, Serialize};

use crate::matcher::PatternMatch;
use crate::rule::{RiskTier, Rule};

/// Label of the synthetic error result.
pub const ERROR_LABEL: &str = "Erro na análise";

/// Label of the synthetic no-issues result.
pub const NO_ISSUES_LABEL: &str = "Nenhum ponto crítico identificado";

/// One finding produced by the engine. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Id of the catalogue rule behind this finding; `None` for the two
    /// synthetic sentinel results.
    pub source_rule_id: Option<String>,
    pub clause_label: String,
    pub score: u8,
    pub risk_tier: RiskTier,
    pub explanation: String,
    pub remediation: String,
    pub legal_references: Vec<String>,
    pub tags: Vec<String>,
    /// Highlighted excerpt of the normalized text around the match.
    pub excerpt: String,
    /// Byte offset of the match in the normalized text; `None` for
    /// synthetic results.
    pub match_offset: Option<usize>,
    /// Sentence-level context around the match; empty when lookup failed.
    pub context_text: String,
}

impl AnalysisResult {
    /// Build a finding from a catalogue rule and its match.
    pub fn from_rule(rule: &Rule, found: &PatternMatch, excerpt: String, context: String) -> Self {
        AnalysisResult {
            source_rule_id: Some(rule.id.clone()),
            clause_label: rule.name.clone(),
            score: rule.score,
            risk_tier: rule.risk_tier,
            explanation: rule.explanation.clone(),
            remediation: rule.remediation.clone(),
            legal_references: rule.legal_references.clone(),
            tags: rule.tags.clone(),
            excerpt,
            match_offset: Some(found.start),
            context_text: context,
        }
    }

    /// Synthetic result for input that could not be analyzed.
    pub fn error(message: &str) -> Self {
        AnalysisResult {
            source_rule_id: None,
            clause_label: ERROR_LABEL.to_string(),
            score: 0,
            risk_tier: RiskTier::Low,
            explanation: message.to_string(),
            remediation: "Por favor, tente novamente ou entre em contato com o suporte."
                .to_string(),
            legal_references: Vec::new(),
            tags: Vec::new(),
            excerpt: String::new(),
            match_offset: None,
            context_text: String::new(),
        }
    }

    /// Synthetic result for a clean analysis (no rule matched).
    pub fn no_issues() -> Self {
        AnalysisResult {
            source_rule_id: None,
            clause_label: NO_ISSUES_LABEL.to_string(),
            score: 0,
            risk_tier: RiskTier::Low,
            explanation: "Não encontramos cláusulas que normalmente exigem atenção especial \
                          para seu perfil."
                .to_string(),
            remediation: "Ainda assim, recomendamos revisão cuidadosa ou consulta a um \
                          especialista para verificação completa."
                .to_string(),
            legal_references: Vec::new(),
            tags: Vec::new(),
            excerpt: String::new(),
            match_offset: None,
            context_text: String::new(),
        }
    }
}

/// Summary counts derived from a result list, in the single canonical way.
///
/// Persistence sinks store these next to the content hash. Synthetic
/// sentinels are not findings and are excluded from every count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_issues: usize,
    pub high_risk_count: usize,
    pub total_score: u32,
}

impl AnalysisSummary {
    pub fn of(results: &[AnalysisResult]) -> Self {
        let findings = results.iter().filter(|r| r.source_rule_id.is_some());
        let mut summary = AnalysisSummary {
            total_issues: 0,
            high_risk_count: 0,
            total_score: 0,
        };
        for result in findings {
            summary.total_issues += 1;
            summary.total_score += u32::from(result.score);
            if result.risk_tier == RiskTier::High {
                summary.high_risk_count += 1;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(id: &str, score: u8) -> AnalysisResult {
        let rule = Rule::new(id, "Regra", &["x"], score, "", "", &[], &[]);
        let found = PatternMatch {
            start: 0,
            end: 1,
            matched: "x".to_string(),
        };
        AnalysisResult::from_rule(&rule, &found, "...**x**...".to_string(), String::new())
    }

    #[test]
    fn test_error_result_shape() {
        let result = AnalysisResult::error("Texto do contrato inválido ou vazio.");
        assert_eq!(result.clause_label, ERROR_LABEL);
        assert_eq!(result.score, 0);
        assert!(result.source_rule_id.is_none());
        assert!(result.legal_references.is_empty());
        assert_eq!(result.explanation, "Texto do contrato inválido ou vazio.");
    }

    #[test]
    fn test_no_issues_result_shape() {
        let result = AnalysisResult::no_issues();
        assert_eq!(result.clause_label, NO_ISSUES_LABEL);
        assert_eq!(result.score, 0);
        assert!(result.source_rule_id.is_none());
        assert!(result.legal_references.is_empty());
    }

    #[test]
    fn test_sentinels_differ_only_in_wording() {
        let error = AnalysisResult::error("mensagem");
        let clean = AnalysisResult::no_issues();
        assert_ne!(error.clause_label, clean.clause_label);
        assert_eq!(error.score, clean.score);
        assert_eq!(error.source_rule_id, clean.source_rule_id);
    }

    #[test]
    fn test_summary_counts_findings_only() {
        let results = vec![finding("a/1", 9), finding("a/2", 5), AnalysisResult::no_issues()];
        let summary = AnalysisSummary::of(&results);
        assert_eq!(summary.total_issues, 2);
        assert_eq!(summary.high_risk_count, 1);
        assert_eq!(summary.total_score, 14);
    }

    #[test]
    fn test_summary_of_sentinel_only_list() {
        let summary = AnalysisSummary::of(&[AnalysisResult::error("erro")]);
        assert_eq!(summary.total_issues, 0);
        assert_eq!(summary.high_risk_count, 0);
        assert_eq!(summary.total_score, 0);
    }
}
