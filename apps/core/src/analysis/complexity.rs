//! Prompt Complexity Estimation.
//!
//! Coarse three-level estimate from token count plus two override words.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token count above which a prompt is always high complexity
const HIGH_TOKEN_THRESHOLD: usize = 10;

/// Token count below which a prompt is low complexity
const LOW_TOKEN_THRESHOLD: usize = 5;

/// Words that force a high estimate regardless of length
const HIGH_COMPLEXITY_MARKERS: &[&str] = &["advanced", "complex"];

/// Estimated complexity of a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComplexityLevel::Low => "low",
            ComplexityLevel::Medium => "medium",
            ComplexityLevel::High => "high",
        };
        write!(f, "{}", label)
    }
}

/// Complexity scorer for prompts
#[derive(Debug, Default, Clone, Copy)]
pub struct ComplexityScorer;

impl ComplexityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Estimate complexity from the normalized prompt and its token count.
    ///
    /// The high check runs first, so a short prompt mentioning "advanced" is high.
    pub fn assess(&self, prompt: &str, token_count: usize) -> ComplexityLevel {
        let has_marker = HIGH_COMPLEXITY_MARKERS.iter().any(|m| prompt.contains(m));

        if token_count > HIGH_TOKEN_THRESHOLD || has_marker {
            ComplexityLevel::High
        } else if token_count < LOW_TOKEN_THRESHOLD {
            ComplexityLevel::Low
        } else {
            ComplexityLevel::Medium
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_thresholds() {
        let scorer = ComplexityScorer::new();

        assert_eq!(scorer.assess("", 0), ComplexityLevel::Low);
        assert_eq!(scorer.assess("", 4), ComplexityLevel::Low);
        assert_eq!(scorer.assess("", 5), ComplexityLevel::Medium);
        assert_eq!(scorer.assess("", 10), ComplexityLevel::Medium);
        assert_eq!(scorer.assess("", 11), ComplexityLevel::High);
    }

    #[test]
    fn test_marker_overrides_low() {
        let scorer = ComplexityScorer::new();

        assert_eq!(scorer.assess("advanced robots", 2), ComplexityLevel::High);
        assert_eq!(scorer.assess("complexity theory", 2), ComplexityLevel::High);
    }

    #[test]
    fn test_display() {
        assert_eq!(ComplexityLevel::Medium.to_string(), "medium");
    }
}
