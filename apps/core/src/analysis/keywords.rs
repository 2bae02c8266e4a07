//! Keyword Extraction.
//!
//! Picks representative words out of the prepared token sequence.
//! Order is preserved; there is no scoring.

use std::collections::HashSet;

/// Words dropped from keyword extraction on top of the tokenizer's own length filter
const KEYWORD_STOPWORDS: &[&str] = &[
    "what", "how", "why", "when", "where", "this", "that", "with", "from", "into", "during",
    "before", "after", "above", "below",
];

/// Default cap on extracted keywords
pub const MAX_KEYWORDS: usize = 5;

/// Keyword extractor using a stop-word filter
pub struct KeywordExtractor {
    stopwords: HashSet<&'static str>,
    min_word_length: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create a new keyword extractor with default settings
    pub fn new() -> Self {
        Self::with_config(4, MAX_KEYWORDS)
    }

    /// Create a keyword extractor with custom configuration.
    ///
    /// `min_word_length` is inclusive and counted in characters.
    pub fn with_config(min_word_length: usize, max_keywords: usize) -> Self {
        Self {
            stopwords: KEYWORD_STOPWORDS.iter().copied().collect(),
            min_word_length,
            max_keywords,
        }
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Extract keywords from already lower-cased tokens, in original order
    pub fn extract(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| token.chars().count() >= self.min_word_length)
            .filter(|token| !self.is_stopword(token))
            .take(self.max_keywords)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_keyword_extraction() {
        let extractor = KeywordExtractor::new();

        let keywords = extractor.extract(&tokens(&["build", "mobile", "app", "for", "runners"]));
        assert_eq!(keywords, vec!["build", "mobile", "runners"]);
    }

    #[test]
    fn test_stopword_filtering() {
        let extractor = KeywordExtractor::new();

        let keywords = extractor.extract(&tokens(&["what", "where", "this", "during", "garden"]));
        assert_eq!(keywords, vec!["garden"]);
    }

    #[test]
    fn test_truncates_to_five() {
        let extractor = KeywordExtractor::new();

        let input = tokens(&[
            "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
        ]);
        let keywords = extractor.extract(&input);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords, vec!["alpha", "bravo", "charlie", "delta", "echo"]);
    }

    #[test]
    fn test_empty_tokens() {
        let extractor = KeywordExtractor::new();

        assert!(extractor.extract(&[]).is_empty());
    }

    #[test]
    fn test_short_words_filtered() {
        let extractor = KeywordExtractor::new();

        let keywords = extractor.extract(&tokens(&["cat", "dog", "sun"]));
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_stopword_must_match_whole_token() {
        let extractor = KeywordExtractor::new();

        // "without" is not "with"
        let keywords = extractor.extract(&tokens(&["without", "somewhere"]));
        assert_eq!(keywords, vec!["without", "somewhere"]);
    }
}
