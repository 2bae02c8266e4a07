//! Test Module
//!
//! Cross-module test suite for the PromptForge engine.
//!
//! ## Test Categories
//! - `analysis_tests`: Topic, category, keyword, complexity and tone rules
//! - `synthesis_tests`: Template selection, fallback and substitution
//! - `generator_tests`: Validation, busy flag and latency of the service
//! - `integration_tests`: Full prompt → rendered text workflows

pub mod analysis_tests;
pub mod generator_tests;
pub mod integration_tests;
