//! Analysis Module Tests
//!
//! Behavior of the analyzer on prepared prompts.

use crate::analysis::{
    prepare_prompt, Category, ComplexityLevel, PromptAnalyzer, Tone, FALLBACK_TOPIC, MAX_KEYWORDS,
};

fn analyze(raw: &str) -> crate::analysis::PromptAnalysis {
    let prepared = prepare_prompt(raw);
    PromptAnalyzer::new().analyze_prepared(&prepared)
}

#[cfg(test)]
mod topic_tests {
    use super::*;

    #[test]
    fn test_no_qualifying_tokens_uses_defaults() {
        let inputs = vec!["", "   ", "a an to", "hi yo ok", "I am so"];

        for input in inputs {
            let analysis = analyze(input);
            assert_eq!(analysis.topic, FALLBACK_TOPIC, "topic for '{}'", input);
            assert_eq!(
                analysis.category,
                Category::Uncategorized,
                "category for '{}'",
                input
            );
            assert!(analysis.keywords.is_empty(), "keywords for '{}'", input);
        }
    }

    #[test]
    fn test_topic_is_first_long_token() {
        assert_eq!(analyze("An ode to spring").topic, "ode");
        assert_eq!(analyze("Quantum physics").topic, "quantum");
    }
}

#[cfg(test)]
mod category_tests {
    use super::*;

    #[test]
    fn test_category_per_table() {
        let cases = vec![
            ("Build a mobile app", Category::Technology),
            ("Marketing plan for a bakery", Category::Business),
            ("A poem about the sea", Category::Creative),
            ("A lesson on fractions", Category::Education),
            ("Weekly fitness routine", Category::Lifestyle),
            ("Quiet river", Category::Uncategorized),
        ];

        for (prompt, expected) in cases {
            assert_eq!(analyze(prompt).category, expected, "category for '{}'", prompt);
        }
    }

    #[test]
    fn test_earlier_category_wins() {
        // lifestyle "travel" and technology "website" both match
        assert_eq!(analyze("Travel website").category, Category::Technology);
        // education "guide" and business "team" both match
        assert_eq!(analyze("Study guide for the team").category, Category::Business);
    }

    #[test]
    fn test_matches_inside_longer_words() {
        // "programming" contains "program"
        assert_eq!(analyze("Programming basics").category, Category::Technology);
        // "homemade" contains "home"
        assert_eq!(analyze("Homemade bread").category, Category::Lifestyle);
    }

    #[test]
    fn test_short_prompt_still_classifies() {
        // a token, but too short to be a keyword
        let analysis = analyze("api");
        assert_eq!(analysis.category, Category::Technology);
        assert_eq!(analysis.topic, "api");
        assert!(analysis.keywords.is_empty());
    }
}

#[cfg(test)]
mod keyword_tests {
    use super::*;

    #[test]
    fn test_keywords_bounded() {
        let long_prompt = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima mike november";
        let analysis = analyze(long_prompt);

        assert_eq!(analysis.keywords.len(), MAX_KEYWORDS);
        assert_eq!(analysis.keywords[0], "alpha");
    }

    #[test]
    fn test_keywords_skip_stopwords_and_short_tokens() {
        let analysis = analyze("What should happen with this garden after winter");

        assert_eq!(analysis.keywords, vec!["should", "happen", "garden", "winter"]);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        let analysis = analyze("DESIGN Elegant LOGOS");
        assert_eq!(analysis.keywords, vec!["design", "elegant", "logos"]);
    }
}

#[cfg(test)]
mod complexity_tests {
    use super::*;

    #[test]
    fn test_eleven_tokens_is_high() {
        let prompt = "one two three four five six seven eight nine ten eleven";
        assert_eq!(prepare_prompt(prompt).tokens.len(), 11);
        assert_eq!(analyze(prompt).complexity, ComplexityLevel::High);
    }

    #[test]
    fn test_four_tokens_is_low() {
        let prompt = "red green blue gray";
        assert_eq!(analyze(prompt).complexity, ComplexityLevel::Low);
    }

    #[test]
    fn test_five_to_ten_tokens_is_medium() {
        assert_eq!(
            analyze("red green blue gray pink").complexity,
            ComplexityLevel::Medium
        );
        assert_eq!(
            analyze("one two three four five six seven eight nine ten").complexity,
            ComplexityLevel::Medium
        );
    }

    #[test]
    fn test_override_words() {
        assert_eq!(analyze("Advanced yoga").complexity, ComplexityLevel::High);
        assert_eq!(analyze("A complex recipe").complexity, ComplexityLevel::High);
    }

    #[test]
    fn test_short_tokens_do_not_count() {
        // only "tea" and "cup" qualify
        assert_eq!(analyze("a tea in a cup of it").complexity, ComplexityLevel::Low);
    }
}

#[cfg(test)]
mod tone_tests {
    use super::*;

    #[test]
    fn test_tone_markers() {
        assert_eq!(analyze("An exciting trip").tone, Tone::Enthusiastic);
        assert_eq!(analyze("A professional bio").tone, Tone::Formal);
        assert_eq!(analyze("A short bio").tone, Tone::Neutral);
    }

    #[test]
    fn test_fun_beats_serious() {
        assert_eq!(analyze("Something fun but serious").tone, Tone::Enthusiastic);
    }
}
