//! The analysis engine: orchestrates normalization, rule application,
//! fallback handling, ranking, and metadata assembly.
//!
//! [`AnalysisEngine::analyze`] is the crate's public entry point. It is a
//! pure, synchronous function of `(text, role)` against the immutable
//! catalogue: no I/O, no shared mutable state, safe to call concurrently
//! without locking. Callers own deadlines and caching; results keyed by
//! `(content_hash, role)` are safe to cache because the engine is
//! deterministic.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use unicode_segmentation::UnicodeSegmentation;

use crate::catalog::RuleCatalog;
use crate::context::ContextResolver;
use crate::errors::InputError;
use crate::excerpt::ExcerptBuilder;
use crate::matcher::{PatternMatcher, PatternOutcome};
use crate::metadata::{content_hash, ContractMetadata};
use crate::normalize::TextNormalizer;
use crate::result::AnalysisResult;
use crate::sentence::SentenceSegmenter;

/// Output of one analysis call.
///
/// `metadata` is `None` exactly when the result list collapsed to the single
/// error result; callers must not depend on it being present in that case.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Ranked results: score descending, catalogue order on ties. Never
    /// empty — a clean analysis carries the single no-issues result.
    pub results: Vec<AnalysisResult>,
    pub metadata: Option<ContractMetadata>,
}

/// Role-aware risky-clause detector over an immutable [`RuleCatalog`].
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    catalog: Arc<RuleCatalog>,
    normalizer: TextNormalizer,
    segmenter: SentenceSegmenter,
    matcher: PatternMatcher,
    excerpts: ExcerptBuilder,
    context: ContextResolver,
}

impl AnalysisEngine {
    /// Engine over the shared default catalogue.
    pub fn new() -> Self {
        Self::with_catalog(RuleCatalog::shared())
    }

    /// Engine over a custom catalogue.
    pub fn with_catalog(catalog: Arc<RuleCatalog>) -> Self {
        AnalysisEngine {
            catalog,
            normalizer: TextNormalizer::new(),
            segmenter: SentenceSegmenter::new(),
            matcher: PatternMatcher::new(),
            excerpts: ExcerptBuilder::new(),
            context: ContextResolver::new(),
        }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Analyze `raw_text` for the given contractual role.
    ///
    /// Total: every input yields a well-formed, displayable result list.
    /// Invalid input yields the single error result; a clean run yields the
    /// single no-issues result; an unknown role degrades to "no rules" and
    /// therefore also yields the no-issues result.
    pub fn analyze(&self, raw_text: &str, role: &str) -> AnalysisReport {
        if raw_text.trim().is_empty() {
            return AnalysisReport {
                results: vec![AnalysisResult::error(&InputError::EmptyText.to_string())],
                metadata: None,
            };
        }

        let started = Instant::now();

        let normalized = self.normalizer.normalize(raw_text);
        let sentences = self.segmenter.segment(&normalized);
        let word_count = normalized.unicode_words().count();
        let hash = content_hash(&normalized);

        let mut results = Vec::new();
        for rule in self.catalog.rules_for(role) {
            for pattern in &rule.patterns {
                match self.matcher.first_match(pattern, &normalized) {
                    PatternOutcome::Match(found) => {
                        let excerpt = self.excerpts.build(&normalized, Some(&found));
                        let context = self.context.resolve(&sentences, &found.matched);
                        results.push(AnalysisResult::from_rule(rule, &found, excerpt, context));
                        // At most one result per rule: first match wins.
                        break;
                    }
                    PatternOutcome::NoMatch => {}
                    PatternOutcome::CompileError(error) => {
                        tracing::warn!(
                            rule = %rule.id,
                            pattern = %pattern,
                            %error,
                            "skipping pattern that failed to compile"
                        );
                    }
                }
            }
        }

        if results.is_empty() {
            results.push(AnalysisResult::no_issues());
        }

        // Stable: equal scores keep catalogue order.
        results.sort_by(|a, b| b.score.cmp(&a.score));

        let duration_ms = started.elapsed().as_millis() as u64;
        tracing::debug!(
            role,
            result_count = results.len(),
            duration_ms,
            "analysis completed"
        );

        AnalysisReport {
            results,
            metadata: Some(ContractMetadata {
                content_hash: hash,
                word_count,
                sentence_count: sentences.len(),
                optional_entities: None,
                processing_duration_ms: duration_ms,
                analyzed_at: Utc::now(),
            }),
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
