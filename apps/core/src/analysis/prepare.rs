//! Prompt preparation: the normalization every caller performs before analysis.

use serde::{Deserialize, Serialize};

/// Tokens must be longer than this many characters to survive preparation
const MIN_TOKEN_CHARS: usize = 2;

/// A prompt ready for analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedPrompt {
    /// Trimmed prompt in its original case
    pub original: String,
    /// Trimmed, lower-cased prompt
    pub normalized: String,
    /// Lower-cased tokens longer than two characters
    pub tokens: Vec<String>,
}

/// Trim, lower-case and tokenize a raw prompt.
///
/// Tokens are split on single spaces only, so runs of spaces produce empty
/// pieces that the length filter then drops.
pub fn prepare_prompt(raw: &str) -> PreparedPrompt {
    let original = raw.trim().to_string();
    let normalized = original.to_lowercase();
    let tokens = normalized
        .split(' ')
        .filter(|word| word.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect();

    PreparedPrompt {
        original,
        normalized,
        tokens,
    }
}
