//! Sentence-level context around a match.
//!
//! For richer display, a finding carries the sentence containing the matched
//! phrase plus its immediate neighbors. Lookup can legitimately fail when
//! normalization or the match itself crosses a sentence boundary; that case
//! degrades silently to an empty context.

/// Locates the sentences surrounding a matched substring.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextResolver;

impl ContextResolver {
    pub fn new() -> Self {
        ContextResolver
    }

    /// Return the first sentence containing `matched`, concatenated with the
    /// sentence before and after it (when present), space-joined.
    ///
    /// Returns an empty string when no sentence contains the substring.
    pub fn resolve(&self, sentences: &[String], matched: &str) -> String {
        let position = match sentences.iter().position(|s| s.contains(matched)) {
            Some(position) => position,
            None => return String::new(),
        };

        let from = position.saturating_sub(1);
        let to = (position + 2).min(sentences.len());
        sentences[from..to].join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_middle_sentence_with_neighbors() {
        let s = sentences(&["primeira.", "a multa é alta.", "terceira."]);
        assert_eq!(
            ContextResolver::new().resolve(&s, "multa"),
            "primeira. a multa é alta. terceira."
        );
    }

    #[test]
    fn test_first_sentence_no_predecessor() {
        let s = sentences(&["a multa é alta.", "segunda."]);
        assert_eq!(
            ContextResolver::new().resolve(&s, "multa"),
            "a multa é alta. segunda."
        );
    }

    #[test]
    fn test_last_sentence_no_successor() {
        let s = sentences(&["primeira.", "a multa é alta."]);
        assert_eq!(
            ContextResolver::new().resolve(&s, "multa"),
            "primeira. a multa é alta."
        );
    }

    #[test]
    fn test_single_sentence() {
        let s = sentences(&["a multa é alta."]);
        assert_eq!(ContextResolver::new().resolve(&s, "multa"), "a multa é alta.");
    }

    #[test]
    fn test_first_containing_sentence_wins() {
        let s = sentences(&["multa aqui.", "outra.", "multa ali."]);
        assert_eq!(
            ContextResolver::new().resolve(&s, "multa"),
            "multa aqui. outra."
        );
    }

    #[test]
    fn test_not_found_is_empty() {
        let s = sentences(&["primeira.", "segunda."]);
        assert_eq!(ContextResolver::new().resolve(&s, "multa"), "");
    }

    #[test]
    fn test_empty_sentences() {
        assert_eq!(ContextResolver::new().resolve(&[], "multa"), "");
    }
}
