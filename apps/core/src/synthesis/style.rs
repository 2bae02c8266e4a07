//! Writing styles offered for text generation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested register for generated text
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingStyle {
    #[default]
    Creative,
    Professional,
    Casual,
    Academic,
}

impl WritingStyle {
    pub const ALL: [WritingStyle; 4] = [
        WritingStyle::Creative,
        WritingStyle::Professional,
        WritingStyle::Casual,
        WritingStyle::Academic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WritingStyle::Creative => "creative",
            WritingStyle::Professional => "professional",
            WritingStyle::Casual => "casual",
            WritingStyle::Academic => "academic",
        }
    }
}

impl fmt::Display for WritingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for WritingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        WritingStyle::ALL
            .into_iter()
            .find(|style| style.label() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown writing style '{}' (expected creative, professional, casual or academic)",
                    s.trim()
                )
            })
    }
}
