//! Generator Tests
//!
//! Request validation, the one-in-flight busy flag and simulated latency.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::generator::TextGenerator;
use crate::models::GenerationRequest;
use crate::synthesis::WritingStyle;

fn generator_with_latency(ms: u64) -> TextGenerator {
    TextGenerator::new(&AppConfig {
        simulated_latency: Duration::from_millis(ms),
        ..AppConfig::default()
    })
}

#[tokio::test]
async fn test_concurrent_generation_is_rejected() {
    let generator = Arc::new(generator_with_latency(200));

    let first = {
        let generator = Arc::clone(&generator);
        tokio::spawn(async move {
            let request = GenerationRequest::new("Build a mobile app", WritingStyle::Casual);
            generator.generate(&request).await
        })
    };

    // let the first call take the flag
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(generator.is_generating());

    let request = GenerationRequest::new("Plan a trip", WritingStyle::Casual);
    let second = generator.generate(&request).await;
    assert!(matches!(second, Err(AppError::Busy)));

    let first = first.await.expect("task panicked");
    assert!(first.is_ok());
    assert!(!generator.is_generating());
}

#[tokio::test]
async fn test_flag_released_after_success() {
    let generator = TextGenerator::default();

    for _ in 0..3 {
        let request = GenerationRequest::new("Garden ideas", WritingStyle::Academic);
        assert!(generator.generate(&request).await.is_ok());
    }
}

#[tokio::test]
async fn test_latency_is_applied() {
    let generator = generator_with_latency(100);

    let start = Instant::now();
    let request = GenerationRequest::new("Garden ideas", WritingStyle::Creative);
    generator.generate(&request).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn test_latency_does_not_change_output() {
    let fast = TextGenerator::default();
    let slow = generator_with_latency(20);
    let request = GenerationRequest::new("A fun serious story", WritingStyle::Creative);

    let a = fast.generate(&request).await.unwrap();
    let b = slow.generate(&request).await.unwrap();

    assert_eq!(a.text, b.text);
    assert_eq!(a.analysis, b.analysis);
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_validation_errors() {
    let generator = TextGenerator::default();

    let cases = vec![String::new(), "    ".to_string(), "x".repeat(2001)];
    for prompt in cases {
        let request = GenerationRequest::new(prompt, WritingStyle::Casual);
        let err = generator.generate(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
    }
}
