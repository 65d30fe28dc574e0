//! Role-aware risky-clause detection for Portuguese contract text.
//!
//! The engine scans contract text and flags clauses matching a curated
//! catalogue of legally risky patterns, tailored to the reader's contractual
//! role (consumer, service provider, tenant, business owner). It is a
//! deterministic pattern-matching classifier — no semantic or legal
//! reasoning, and no guarantee of legal accuracy.
//!
//! ## Components
//!
//! - [`RuleCatalog`] - immutable, role-keyed collection of detection rules
//! - [`TextNormalizer`] - canonicalizes raw text for matching and metrics
//! - [`SentenceSegmenter`] - Portuguese-aware sentence segmentation
//! - [`PatternMatcher`] - evaluates one pattern, returns a three-way outcome
//! - [`ExcerptBuilder`] - bounded, highlighted snippet around a match
//! - [`ContextResolver`] - surrounding sentences for richer display
//! - [`AnalysisEngine`] - the public entry point
//!
//! ## Example
//!
//! ```
//! use clause_risk::AnalysisEngine;
//!
//! let engine = AnalysisEngine::new();
//! let report = engine.analyze(
//!     "A empresa não poderá rescindir o contrato sob nenhuma hipótese.",
//!     "Consumidor",
//! );
//! assert_eq!(report.results[0].clause_label, "Proibição de cancelamento");
//! ```
//!
//! The engine is pure and synchronous: concurrent calls against the shared
//! catalogue need no locking, and identical `(text, role)` inputs produce
//! identical ordered results and content hash.

mod catalog;
mod context;
mod engine;
mod errors;
mod excerpt;
mod matcher;
mod metadata;
mod normalize;
mod result;
mod rule;
mod sentence;

pub use catalog::RuleCatalog;
pub use context::ContextResolver;
pub use engine::{AnalysisEngine, AnalysisReport};
pub use errors::InputError;
pub use excerpt::{ExcerptBuilder, EXCERPT_NOT_FOUND};
pub use matcher::{PatternMatch, PatternMatcher, PatternOutcome};
pub use metadata::{content_hash, ContractMetadata};
pub use normalize::TextNormalizer;
pub use result::{AnalysisResult, AnalysisSummary, ERROR_LABEL, NO_ISSUES_LABEL};
pub use rule::{RiskTier, Rule};
pub use sentence::SentenceSegmenter;
