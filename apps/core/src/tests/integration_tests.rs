//! Integration Tests
//!
//! End-to-end flows from a raw prompt to display-ready output.

use crate::analysis::{prepare_prompt, Category, ComplexityLevel, Tone, FALLBACK_TOPIC};
use crate::generator::TextGenerator;
use crate::image_query::{plan_image_search, ImageStyle};
use crate::models::GenerationRequest;
use crate::render;
use crate::synthesis::{CodeLanguage, WritingStyle};
use crate::{analyze, generate_code, synthesize};

#[test]
fn test_free_functions_match_service_pipeline() {
    let prepared = prepare_prompt("Build a mobile app");
    let analysis = analyze(&prepared.normalized, &prepared.tokens);
    let text = synthesize("Build a mobile app", &analysis, WritingStyle::Professional);

    assert_eq!(analysis.category, Category::Technology);
    assert!(text.starts_with("🔧 **Professional Technical Analysis: Build a mobile app**"));
}

#[test]
fn test_empty_prompt_produces_default_output() {
    let analysis = analyze("", &[]);
    assert_eq!(analysis.topic, FALLBACK_TOPIC);
    assert_eq!(analysis.category, Category::Uncategorized);

    for style in WritingStyle::ALL {
        let text = synthesize("", &analysis, style);
        assert!(!text.is_empty());
    }

    let casual = synthesize("", &analysis, WritingStyle::Casual);
    assert!(casual.contains("**First off, what is topic?**"));
}

#[test]
fn test_analysis_and_text_are_repeatable() {
    let prepared = prepare_prompt("Create a fun and exciting travel blog with advanced features");

    let a1 = analyze(&prepared.normalized, &prepared.tokens);
    let a2 = analyze(&prepared.normalized, &prepared.tokens);
    assert_eq!(a1, a2);
    assert_eq!(a1.tone, Tone::Enthusiastic);
    assert_eq!(a1.complexity, ComplexityLevel::High);

    for style in WritingStyle::ALL {
        assert_eq!(
            synthesize(&prepared.original, &a1, style),
            synthesize(&prepared.original, &a2, style)
        );
    }
}

#[tokio::test]
async fn test_generate_and_render_html() {
    let generator = TextGenerator::default();
    let request = GenerationRequest::new("Startup pitch\\nfor investors", WritingStyle::Casual);

    let result = generator.generate(&request).await.unwrap();
    assert_eq!(result.analysis.category, Category::Business);

    let html = render::to_html(&result.text);
    assert!(html.contains("Startup pitch<br>for investors"));
    assert!(!html.contains("\\n"));

    let plain = render::to_plain(&result.text);
    assert!(plain.contains("Startup pitch\nfor investors"));
}

#[tokio::test]
async fn test_result_serializes() {
    let generator = TextGenerator::default();
    let request = GenerationRequest::new("Healthy cooking tips", WritingStyle::Academic);

    let result = generator.generate(&request).await.unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["style"], "academic");
    assert_eq!(json["analysis"]["category"], "lifestyle");
    assert!(json["text"].as_str().unwrap().starts_with("🎓 **Academic Research: Healthy cooking tips**"));
}

#[test]
fn test_image_plan_for_generation_prompt() {
    let plan = plan_image_search(
        "Highly detailed portrait of an old fisherman, photorealistic",
        ImageStyle::Realistic,
    );

    assert_eq!(&plan.keywords[..3], &["portrait", "old", "fisherman"]);
    assert_eq!(plan.queries[1], "portrait old fisherman");
    assert_eq!(plan.queries[2], "portrait old photography");
}

#[test]
fn test_code_for_every_language_serializes() {
    for language in CodeLanguage::ALL {
        let generated = generate_code("Recipe finder", language);
        let json = render::to_json(&generated).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["language"], language.label());
        assert_eq!(value["identifiers"]["class"], "Recipefinder");
        assert!(value["code"].as_str().unwrap().contains("Recipe"));
    }
}

#[test]
fn test_code_for_punctuation_only_prompt() {
    let generated = generate_code("?!", CodeLanguage::Java);

    assert!(generated.code.contains("public class GeneratedManager {"));
    assert_eq!(generated.file_name, "GeneratedManager.java");
}
