//! Bounded, highlighted excerpts around a match.
//!
//! The excerpt is the primary thing users see for a finding: a window of the
//! normalized contract text around the matched phrase, with the match wrapped
//! in `**` markers and ellipses at both ends.

use crate::matcher::PatternMatch;

/// Marker returned when a rule matched but no excerpt could be produced.
pub const EXCERPT_NOT_FOUND: &str = "Trecho não encontrado";

/// Default window: characters kept before and after the matched phrase.
const DEFAULT_WINDOW: usize = 100;

/// Compact window for dense display surfaces.
const COMPACT_WINDOW: usize = 50;

/// Builds display excerpts from a text and a [`PatternMatch`] into it.
#[derive(Debug, Clone, Copy)]
pub struct ExcerptBuilder {
    window: usize,
}

impl ExcerptBuilder {
    /// Canonical builder: 100 characters of context on each side.
    pub fn new() -> Self {
        ExcerptBuilder {
            window: DEFAULT_WINDOW,
        }
    }

    /// Half-width builder for dense surfaces (50 characters each side).
    pub fn compact() -> Self {
        ExcerptBuilder {
            window: COMPACT_WINDOW,
        }
    }

    /// Build the excerpt for `found` within `text`.
    ///
    /// With no match available, returns the literal
    /// [`EXCERPT_NOT_FOUND`] placeholder rather than failing.
    pub fn build(&self, text: &str, found: Option<&PatternMatch>) -> String {
        let found = match found {
            Some(found) => found,
            None => return EXCERPT_NOT_FOUND.to_string(),
        };
        if found.start > text.len() || found.end > text.len() {
            return EXCERPT_NOT_FOUND.to_string();
        }

        let start = walk_back(text, found.start, self.window);
        let end = walk_forward(text, found.end, self.window);

        let window = text[start..end]
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let highlighted = window.replace(&found.matched, &format!("**{}**", found.matched));

        format!("...{}...", highlighted)
    }
}

impl Default for ExcerptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Step back up to `count` characters from byte offset `from`.
fn walk_back(text: &str, from: usize, count: usize) -> usize {
    let mut offset = from;
    for _ in 0..count {
        match text[..offset].chars().next_back() {
            Some(c) => offset -= c.len_utf8(),
            None => break,
        }
    }
    offset
}

/// Step forward up to `count` characters from byte offset `from`.
fn walk_forward(text: &str, from: usize, count: usize) -> usize {
    let mut offset = from;
    for _ in 0..count {
        match text[offset..].chars().next() {
            Some(c) => offset += c.len_utf8(),
            None => break,
        }
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{PatternMatcher, PatternOutcome};

    fn match_in(pattern: &str, text: &str) -> PatternMatch {
        match PatternMatcher::new().first_match(pattern, text) {
            PatternOutcome::Match(found) => found,
            other => panic!("expected match, got {:?}", other),
        }
    }

    #[test]
    fn test_highlights_match() {
        let text = "o contratante pagará multa de 10% sobre o valor";
        let found = match_in("multa", text);
        let excerpt = ExcerptBuilder::new().build(text, Some(&found));
        insta::assert_snapshot!(excerpt, @"...o contratante pagará **multa** de 10% sobre o valor...");
    }

    #[test]
    fn test_clips_to_window() {
        let padding = "palavra ".repeat(40);
        let text = format!("{}multa de rescisão{}", padding, " final".repeat(40));
        let found = match_in("multa", &text);
        let excerpt = ExcerptBuilder::compact().build(&text, Some(&found));
        // 50 chars each side plus markers and ellipses.
        assert!(excerpt.starts_with("..."));
        assert!(excerpt.ends_with("..."));
        assert!(excerpt.contains("**multa**"));
        assert!(excerpt.chars().count() <= 50 + 50 + "multa".len() + 10);
    }

    #[test]
    fn test_clips_to_text_bounds() {
        let text = "multa curta";
        let found = match_in("multa", text);
        let excerpt = ExcerptBuilder::new().build(text, Some(&found));
        assert_eq!(excerpt, "...**multa** curta...");
    }

    #[test]
    fn test_collapses_internal_whitespace() {
        // Normalized text never has whitespace runs, but the builder does not
        // assume its input was normalized.
        let text = "cláusula  com   multa   pesada";
        let found = match_in("multa", text);
        let excerpt = ExcerptBuilder::new().build(text, Some(&found));
        assert_eq!(excerpt, "...cláusula com **multa** pesada...");
    }

    #[test]
    fn test_no_match_placeholder() {
        let excerpt = ExcerptBuilder::new().build("qualquer texto", None);
        assert_eq!(excerpt, EXCERPT_NOT_FOUND);
    }

    #[test]
    fn test_window_respects_multibyte_boundaries() {
        let text = "çãoéíú ".repeat(30) + "multa" + &" áéíóú".repeat(30);
        let found = match_in("multa", &text);
        let excerpt = ExcerptBuilder::new().build(&text, Some(&found));
        assert!(excerpt.contains("**multa**"));
    }
}
