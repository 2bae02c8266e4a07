//! PromptForge text engine.
//!
//! Rule-based prompt analysis and template synthesis behind a small
//! generation service, plus starter-code templates and image-search query
//! planning.

pub mod analysis;
pub mod config;
pub mod error;
pub mod generator;
pub mod image_query;
pub mod models;
pub mod render;
pub mod synthesis;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use analysis::{prepare_prompt, PromptAnalysis, PromptAnalyzer};
pub use error::AppError;
pub use generator::TextGenerator;
pub use synthesis::{CodeLanguage, CodeSynthesizer, GeneratedCode, TemplateSynthesizer, WritingStyle};

/// Analyze a normalized prompt and its tokens
pub fn analyze(prompt: &str, tokens: &[String]) -> PromptAnalysis {
    PromptAnalyzer::new().analyze(prompt, tokens)
}

/// Synthesize the text block for a prompt, its analysis and a writing style
pub fn synthesize(prompt: &str, analysis: &PromptAnalysis, style: WritingStyle) -> String {
    TemplateSynthesizer::new().synthesize(prompt, analysis, style)
}

/// Starter code for a prompt in the given language
pub fn generate_code(prompt: &str, language: CodeLanguage) -> GeneratedCode {
    CodeSynthesizer::new().synthesize(prompt, language)
}
