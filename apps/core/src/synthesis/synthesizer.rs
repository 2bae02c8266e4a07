//! Template Synthesizer.
//!
//! Fills the selected template with the prompt, analysis topic and keywords.
//! Pure and infallible: unknown placeholders are left as written.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::style::WritingStyle;
use super::templates::select_template;
use crate::analysis::PromptAnalysis;

/// Keywords shown where a template only has room for a short list
const SHORT_KEYWORD_COUNT: usize = 3;

pub(crate) static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("Invalid regex: template placeholder"));

/// Synthesizes formatted text from a prompt and its analysis
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateSynthesizer;

impl TemplateSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Produce the formatted text block for `style`.
    ///
    /// `prompt` is substituted verbatim, so callers pass the original-case text.
    pub fn synthesize(&self, prompt: &str, analysis: &PromptAnalysis, style: WritingStyle) -> String {
        let template = select_template(style, analysis.category);
        self.render(template, prompt, analysis)
    }

    /// Fill one template in a single pass. Substituted values are never rescanned,
    /// so a prompt containing `{topic}` is emitted literally.
    pub fn render(&self, template: &str, prompt: &str, analysis: &PromptAnalysis) -> String {
        let high = analysis.is_complex();

        PLACEHOLDER
            .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
                "prompt" => prompt.to_string(),
                "topic" => analysis.topic.clone(),
                "keywords" => analysis.joined_keywords(),
                "keywords_short" => analysis.joined_keywords_prefix(SHORT_KEYWORD_COUNT),
                "scale" => pick(high, "complex, enterprise-level", "standard"),
                "risk" => pick(
                    high,
                    "High - Requires specialized expertise",
                    "Medium - Standard development practices",
                ),
                "timeline" => pick(high, "6-12 months", "3-6 months"),
                "team" => pick(
                    high,
                    "Senior development team with specialized skills",
                    "Standard development team",
                ),
                "investment" => pick(
                    high,
                    "Significant capital investment required",
                    "Moderate investment with potential for rapid ROI",
                ),
                "implementation" => pick(
                    high,
                    "High complexity requiring specialized expertise and significant resources",
                    "Medium complexity with standard implementation approaches",
                ),
                _ => caps[0].to_string(),
            })
            .into_owned()
    }
}

fn pick(high: bool, when_high: &str, otherwise: &str) -> String {
    let phrase = if high { when_high } else { otherwise };
    phrase.to_string()
}
