use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::analysis::PromptAnalysis;
use crate::synthesis::WritingStyle;

/// A request to generate text for one prompt.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct GenerationRequest {
    /// Free-text description supplied by the user. The character limit is
    /// applied by the generator to the trimmed prompt.
    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub prompt: String,
    /// Register for the generated text.
    #[serde(default)]
    pub style: WritingStyle,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, style: WritingStyle) -> Self {
        Self {
            prompt: prompt.into(),
            style,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Please enter a description for your text".into());
        return Err(err);
    }
    Ok(())
}

/// Outcome of a successful generation.
///
/// `id` and `generated_at` are display metadata only; `text` depends solely
/// on the prompt and style.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerationResult {
    /// Unique identifier for this generation.
    pub id: Uuid,
    /// Trimmed prompt in its original case.
    pub prompt: String,
    pub style: WritingStyle,
    pub analysis: PromptAnalysis,
    /// The synthesized text block.
    pub text: String,
    pub generated_at: DateTime<Utc>,
}
