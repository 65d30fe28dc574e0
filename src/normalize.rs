//! Text normalization for matching and metrics.
//!
//! Raw contract text arrives with arbitrary line wrapping, PDF extraction
//! artifacts, and mixed case. [`TextNormalizer`] canonicalizes it in three
//! steps, in order:
//!
//! 1. collapse runs of whitespace (including newlines) to single spaces
//! 2. rejoin hyphen-broken words split across line boundaries
//! 3. lower-case the result for case-insensitive matching
//!
//! Excerpts are taken from the normalized text, so highlighted excerpts
//! render lower-case.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// A broken word continues in lower case, so "contra- to" rejoins but a
// legitimate dash before a capitalized word or a number survives.
static BROKEN_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\p{L})- (\p{Ll})").unwrap());

/// Canonicalizes raw contract text. Stateless; construct once and share.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        TextNormalizer
    }

    /// Produce the normalized form of `raw`.
    ///
    /// Empty input never reaches this method in practice: the engine
    /// short-circuits to the error result first. Called directly, empty
    /// input simply normalizes to the empty string.
    pub fn normalize(&self, raw: &str) -> String {
        let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
        let rejoined = BROKEN_WORD.replace_all(&collapsed, "$1$2");
        rejoined.trim().to_lowercase()
    }
}
