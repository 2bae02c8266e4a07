//! Tone detection from marker words.

use serde::{Deserialize, Serialize};
use std::fmt;

const ENTHUSIASTIC_MARKERS: &[&str] = &["fun", "creative", "exciting"];
const FORMAL_MARKERS: &[&str] = &["serious", "professional", "formal"];

/// Coarse sentiment of the prompt wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Enthusiastic,
    Formal,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tone::Neutral => "neutral",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Formal => "formal",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ToneDetector;

impl ToneDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect tone in a normalized prompt. Enthusiastic markers win over formal ones.
    pub fn detect(&self, prompt: &str) -> Tone {
        if ENTHUSIASTIC_MARKERS.iter().any(|m| prompt.contains(m)) {
            Tone::Enthusiastic
        } else if FORMAL_MARKERS.iter().any(|m| prompt.contains(m)) {
            Tone::Formal
        } else {
            Tone::Neutral
        }
    }
}
