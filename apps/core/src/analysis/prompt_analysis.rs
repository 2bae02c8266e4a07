//! Prompt Analysis - Output structure for the analyzer.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::complexity::ComplexityLevel;
use super::tone::Tone;

/// Topic used when the prompt has no usable token
pub const FALLBACK_TOPIC: &str = "topic";

/// Everything the synthesizer needs to know about a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    /// First usable token, never empty
    pub topic: String,

    /// Topical bucket
    pub category: Category,

    /// Up to five representative words, in prompt order
    pub keywords: Vec<String>,

    /// Length/vocabulary based estimate
    pub complexity: ComplexityLevel,

    /// Wording based sentiment
    pub tone: Tone,
}

impl Default for PromptAnalysis {
    fn default() -> Self {
        Self {
            topic: FALLBACK_TOPIC.to_string(),
            category: Category::Uncategorized,
            keywords: vec![],
            complexity: ComplexityLevel::Low,
            tone: Tone::Neutral,
        }
    }
}

impl PromptAnalysis {
    /// Keywords joined for display
    pub fn joined_keywords(&self) -> String {
        self.keywords.join(", ")
    }

    /// First `n` keywords joined for display
    pub fn joined_keywords_prefix(&self, n: usize) -> String {
        self.keywords
            .iter()
            .take(n)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_complex(&self) -> bool {
        self.complexity == ComplexityLevel::High
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Topic: {}, Category: {}, Keywords: {}, Complexity: {}, Tone: {}",
            self.topic,
            self.category,
            self.keywords.len(),
            self.complexity,
            self.tone
        )
    }
}
