//! Fixture file format.
//!
//! A fixture is a TOML file describing one analysis scenario: the input text,
//! the reader's role, and the findings the engine is expected to produce.
//!
//! ```toml
//! title = "Proibição de cancelamento para consumidores"
//! role = "Consumidor"
//! text = "A empresa não poderá rescindir o contrato sob nenhuma hipótese."
//! total = 1
//!
//! [[expect]]
//! label = "Proibição de cancelamento"
//! score = 8
//! tier = "High"
//! law_reference = "CDC Art. 51, IV"
//! excerpt_contains = "**não poderá rescindir"
//! ```

use clause_risk::RiskTier;
use serde::Deserialize;

use crate::errors::{SpecError, SpecResult};

/// A parsed fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecFixture {
    /// Human-readable scenario name.
    pub title: Option<String>,
    /// Contractual role the text is analyzed under.
    pub role: String,
    /// Raw contract text fed to the engine.
    pub text: String,
    /// Expected total result count, when the scenario pins it down.
    #[serde(default)]
    pub total: Option<usize>,
    /// Expected findings, in any order.
    #[serde(default, rename = "expect")]
    pub expectations: Vec<Expectation>,
}

/// One expected finding. `label` selects the result; every other field is an
/// optional check against it.
#[derive(Debug, Clone, Deserialize)]
pub struct Expectation {
    /// Clause label of the expected result (also matches the sentinel
    /// labels, so fixtures can assert error and no-issues outcomes).
    pub label: String,
    #[serde(default)]
    pub rule_id: Option<String>,
    #[serde(default)]
    pub score: Option<u8>,
    /// Risk tier name: "Low", "Medium" or "High".
    #[serde(default)]
    pub tier: Option<String>,
    /// Must appear among the result's legal references.
    #[serde(default)]
    pub law_reference: Option<String>,
    /// Substring expected in the highlighted excerpt.
    #[serde(default)]
    pub excerpt_contains: Option<String>,
    /// Substring expected in the sentence context.
    #[serde(default)]
    pub context_contains: Option<String>,
}

impl Expectation {
    /// Resolve the `tier` field to a [`RiskTier`], if present.
    pub fn expected_tier(&self) -> SpecResult<Option<RiskTier>> {
        match self.tier.as_deref() {
            None => Ok(None),
            Some("Low") => Ok(Some(RiskTier::Low)),
            Some("Medium") => Ok(Some(RiskTier::Medium)),
            Some("High") => Ok(Some(RiskTier::High)),
            Some(other) => Err(SpecError::UnknownTier {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_fixture() {
        let fixture: SpecFixture = toml::from_str(
            r#"
role = "Consumidor"
text = "texto qualquer"
"#,
        )
        .unwrap();
        assert_eq!(fixture.role, "Consumidor");
        assert!(fixture.expectations.is_empty());
        assert!(fixture.total.is_none());
    }

    #[test]
    fn test_parse_full_expectation() {
        let fixture: SpecFixture = toml::from_str(
            r#"
title = "Cenário completo"
role = "Consumidor"
text = "A empresa não poderá rescindir o contrato sob nenhuma hipótese."
total = 1

[[expect]]
label = "Proibição de cancelamento"
rule_id = "consumidor/cancelamento"
score = 8
tier = "High"
law_reference = "CDC Art. 51, IV"
excerpt_contains = "**não poderá rescindir"
"#,
        )
        .unwrap();

        assert_eq!(fixture.total, Some(1));
        let expectation = &fixture.expectations[0];
        assert_eq!(expectation.score, Some(8));
        assert_eq!(
            expectation.expected_tier().unwrap(),
            Some(clause_risk::RiskTier::High)
        );
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let expectation = Expectation {
            label: "X".to_string(),
            rule_id: None,
            score: None,
            tier: Some("Critical".to_string()),
            law_reference: None,
            excerpt_contains: None,
            context_contains: None,
        };
        assert!(expectation.expected_tier().is_err());
    }
}
