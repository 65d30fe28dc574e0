//! Portuguese-aware sentence segmentation.
//!
//! Splits text on `.`, `?` and `!`, filtering out terminators that sit after
//! known Portuguese abbreviations ("sr.", "art.", "pág.") or between digits
//! (decimal separators, law numbers like "8.245/91"). Segmentation is a
//! best-effort aid for context display and the sentence count metric, never
//! for scoring.

use std::collections::HashSet;

/// Segments normalized (lower-cased) text into sentences.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    abbreviations: HashSet<String>,
    /// When true, treat semicolons as sentence boundaries.
    include_semicolons: bool,
}

impl SentenceSegmenter {
    pub fn new() -> Self {
        let mut abbreviations = HashSet::new();

        // Abbreviations that should NOT end a sentence. Compared against the
        // lower-cased word before the period.
        let common_abbrevs = [
            "sr", "sra", "srta", "dr", "dra", "prof", "profa", "eng", "adv",
            "art", "arts", "inc", "par", "pág", "pag", "fl", "fls",
            "ltda", "s.a", "cia", "av", "tel", "cep",
            "ex", "etc", "obs", "aprox", "p.ex",
        ];

        for abbrev in &common_abbrevs {
            abbreviations.insert(abbrev.to_string());
        }

        SentenceSegmenter {
            abbreviations,
            include_semicolons: false,
        }
    }

    /// Treat semicolons as boundaries.
    ///
    /// Useful for contracts, where semicolons often separate independent
    /// clauses that function as separate obligations.
    pub fn with_semicolons(mut self) -> Self {
        self.include_semicolons = true;
        self
    }

    pub fn with_custom_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        for abbrev in abbreviations {
            self.abbreviations.insert(abbrev.to_lowercase());
        }
        self
    }

    fn is_terminator(&self, c: char) -> bool {
        if matches!(c, '.' | '?' | '!') {
            return true;
        }
        self.include_semicolons && c == ';'
    }

    /// True when the period at `offset` sits inside a number ("8.245", "1.5").
    fn splits_digits(text: &str, offset: usize, c: char) -> bool {
        if c != '.' {
            return false;
        }
        let before = text[..offset].chars().next_back();
        let after = text[offset + c.len_utf8()..].chars().next();
        matches!((before, after), (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit())
    }

    /// True when the period at `offset` ends a known abbreviation.
    fn follows_abbreviation(&self, text: &str, offset: usize, c: char) -> bool {
        if c != '.' {
            return false;
        }
        let word: String = text[..offset]
            .chars()
            .rev()
            .take_while(|c| c.is_alphabetic() || *c == '.')
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        let word = word.trim_end_matches('.');
        if word.is_empty() {
            return false;
        }
        // Single letters are initials or abbreviation parts ("s.a.", "p.ex").
        word.chars().count() == 1 || self.abbreviations.contains(word)
    }

    /// Split `text` into trimmed, non-empty sentences, terminators included.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;

        let mut chars = text.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            if !self.is_terminator(c) {
                continue;
            }
            // Runs like "..." or "?!" end the sentence at the last terminator.
            if let Some((_, next)) = chars.peek() {
                if self.is_terminator(*next) {
                    continue;
                }
            }
            if Self::splits_digits(text, offset, c) {
                continue;
            }
            if self.follows_abbreviation(text, offset, c) {
                continue;
            }

            let end = offset + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<String> {
        SentenceSegmenter::new().segment(text)
    }

    #[test]
    fn test_simple_periods() {
        let sentences = segment("primeira frase. segunda frase. terceira");
        assert_eq!(
            sentences,
            vec!["primeira frase.", "segunda frase.", "terceira"]
        );
    }

    #[test]
    fn test_question_and_exclamation() {
        let sentences = segment("o que diz a cláusula? atenção! revise tudo.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[1], "atenção!");
    }

    #[test]
    fn test_abbreviation_not_boundary() {
        let sentences = segment("o dr. silva assinou o contrato. fim.");
        assert_eq!(
            sentences,
            vec!["o dr. silva assinou o contrato.", "fim."]
        );
    }

    #[test]
    fn test_law_number_not_boundary() {
        let sentences = segment("conforme a lei 8.245/91 o locatário tem direitos. fim.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("8.245/91"));
    }

    #[test]
    fn test_article_abbreviation() {
        let sentences = segment("vedado pelo art. 51 do cdc. outra frase.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "vedado pelo art. 51 do cdc.");
    }

    #[test]
    fn test_ellipsis_single_boundary() {
        let sentences = segment("pendente... resolvido depois.");
        assert_eq!(sentences, vec!["pendente...", "resolvido depois."]);
    }

    #[test]
    fn test_semicolons_disabled_by_default() {
        let sentences = segment("primeira cláusula; segunda cláusula.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_semicolons_enabled() {
        let sentences =
            SentenceSegmenter::new().with_semicolons().segment("primeira cláusula; segunda cláusula.");
        assert_eq!(
            sentences,
            vec!["primeira cláusula;", "segunda cláusula."]
        );
    }

    #[test]
    fn test_company_suffix_not_boundary() {
        let sentences = segment("a empresa s.a. fornecerá o serviço. fim.");
        assert_eq!(
            sentences,
            vec!["a empresa s.a. fornecerá o serviço.", "fim."]
        );
    }

    #[test]
    fn test_custom_abbreviations() {
        let segmenter = SentenceSegmenter::new().with_custom_abbreviations(&["xyz"]);
        let sentences = segmenter.segment("código xyz. continua na mesma frase.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("   ").is_empty());
    }
}
