//! Prompt Analyzer - Main orchestrator for the analysis module.
//!
//! Coordinates topic selection, category classification, keyword extraction,
//! complexity estimation and tone detection. Pure and infallible: every input,
//! including an empty one, yields a complete `PromptAnalysis`.

use super::category::CategoryClassifier;
use super::complexity::ComplexityScorer;
use super::keywords::KeywordExtractor;
use super::prepare::PreparedPrompt;
use super::prompt_analysis::{PromptAnalysis, FALLBACK_TOPIC};
use super::tone::ToneDetector;

/// Main analyzer that orchestrates all analysis components
pub struct PromptAnalyzer {
    category_classifier: CategoryClassifier,
    keyword_extractor: KeywordExtractor,
    complexity_scorer: ComplexityScorer,
    tone_detector: ToneDetector,
}

impl Default for PromptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptAnalyzer {
    pub fn new() -> Self {
        Self {
            category_classifier: CategoryClassifier::new(),
            keyword_extractor: KeywordExtractor::new(),
            complexity_scorer: ComplexityScorer::new(),
            tone_detector: ToneDetector::new(),
        }
    }

    /// Analyze a normalized prompt and its tokens.
    ///
    /// `prompt` must already be trimmed and lower-cased; substring checks rely
    /// on it. `tokens` are the length-filtered words derived from it.
    pub fn analyze(&self, prompt: &str, tokens: &[String]) -> PromptAnalysis {
        let topic = tokens
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_TOPIC.to_string());

        PromptAnalysis {
            topic,
            category: self.category_classifier.classify(prompt).category,
            keywords: self.keyword_extractor.extract(tokens),
            complexity: self.complexity_scorer.assess(prompt, tokens.len()),
            tone: self.tone_detector.detect(prompt),
        }
    }

    /// Analyze a prompt produced by `prepare_prompt`
    pub fn analyze_prepared(&self, prepared: &PreparedPrompt) -> PromptAnalysis {
        self.analyze(&prepared.normalized, &prepared.tokens)
    }
}
