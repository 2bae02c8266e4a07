//! Text Generator - request-level orchestration around the pure core.
//!
//! Guards against overlapping generations, validates the request, waits the
//! configured artificial latency, then runs prepare → analyze → synthesize.

use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::analysis::{prepare_prompt, PromptAnalyzer};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{GenerationRequest, GenerationResult};
use crate::synthesis::TemplateSynthesizer;

/// Clears the busy flag when dropped, on success and error alike
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, AppError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlight(flag))
            .map_err(|_| AppError::Busy)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Generates text for one request at a time
pub struct TextGenerator {
    analyzer: PromptAnalyzer,
    synthesizer: TemplateSynthesizer,
    latency: Duration,
    max_prompt_chars: usize,
    in_flight: AtomicBool,
}

impl Default for TextGenerator {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl TextGenerator {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            analyzer: PromptAnalyzer::new(),
            synthesizer: TemplateSynthesizer::new(),
            latency: config.simulated_latency,
            max_prompt_chars: config.max_prompt_chars,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a generation is currently running
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Generate text for a request.
    ///
    /// Fails with `AppError::Busy` instead of queuing when another call on the
    /// same generator has not finished. The busy check comes before
    /// validation.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, AppError> {
        let _guard = InFlight::acquire(&self.in_flight).inspect_err(|_| {
            warn!("Generation rejected: another request is in flight");
        })?;

        self.check(request)?;

        if !self.latency.is_zero() {
            debug!("Simulating {:?} of generation latency", self.latency);
            tokio::time::sleep(self.latency).await;
        }

        let start = Instant::now();
        let result = self.generate_now(request);

        info!(
            id = %result.id,
            style = %result.style,
            "Generated {} chars in {:?} ({})",
            result.text.len(),
            start.elapsed(),
            result.analysis.summary()
        );

        Ok(result)
    }

    fn check(&self, request: &GenerationRequest) -> Result<(), AppError> {
        request.validate()?;

        let chars = request.prompt.trim().chars().count();
        if chars > self.max_prompt_chars {
            return Err(AppError::Validation(format!(
                "Prompt is {} characters, limit is {}",
                chars, self.max_prompt_chars
            )));
        }
        Ok(())
    }

    /// Core pipeline without validation, busy flag or latency
    fn generate_now(&self, request: &GenerationRequest) -> GenerationResult {
        let prepared = prepare_prompt(&request.prompt);
        let analysis = self.analyzer.analyze_prepared(&prepared);
        let text = self
            .synthesizer
            .synthesize(&prepared.original, &analysis, request.style);

        GenerationResult {
            id: Uuid::new_v4(),
            prompt: prepared.original,
            style: request.style,
            analysis,
            text,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::WritingStyle;

    #[tokio::test]
    async fn test_generate_basic() {
        let generator = TextGenerator::default();

        let request = GenerationRequest::new("  Build a mobile app ", WritingStyle::Professional);
        let result = generator.generate(&request).await.unwrap();

        assert_eq!(result.prompt, "Build a mobile app");
        assert!(result.text.contains("Build a mobile app"));
        assert!(!generator.is_generating());
    }

    #[tokio::test]
    async fn test_blank_prompt_rejected() {
        let generator = TextGenerator::default();

        let request = GenerationRequest::new("   ", WritingStyle::Casual);
        let err = generator.generate(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(!generator.is_generating());
    }

    #[tokio::test]
    async fn test_configured_limit() {
        let config = AppConfig {
            max_prompt_chars: 10,
            ..AppConfig::default()
        };
        let generator = TextGenerator::new(&config);

        let request = GenerationRequest::new("a garden party for friends", WritingStyle::Casual);
        let err = generator.generate(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("limit is 10")));
    }

    #[tokio::test]
    async fn test_busy_wins_over_invalid_prompt() {
        let generator = TextGenerator::default();
        let _guard = InFlight::acquire(&generator.in_flight).unwrap();

        let request = GenerationRequest::new("   ", WritingStyle::Casual);
        let err = generator.generate(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Busy));
    }

    #[tokio::test]
    async fn test_limit_counts_trimmed_prompt() {
        let generator = TextGenerator::default();

        let prompt = format!("   {}   ", "a".repeat(1995));
        let request = GenerationRequest::new(prompt, WritingStyle::Casual);
        assert!(generator.generate(&request).await.is_ok());

        let request = GenerationRequest::new("a".repeat(2001), WritingStyle::Casual);
        let err = generator.generate(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("limit is 2000")));
    }

    #[test]
    fn test_guard_releases_flag() {
        let flag = AtomicBool::new(false);
        {
            let _guard = InFlight::acquire(&flag).unwrap();
            assert!(matches!(InFlight::acquire(&flag), Err(AppError::Busy)));
        }
        assert!(InFlight::acquire(&flag).is_ok());
    }
}
