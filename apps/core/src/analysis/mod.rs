//! # Analysis Module
//!
//! Fast, rule-based prompt analysis. Runs before template synthesis to pick
//! the template variant and the words substituted into it.
//!
//! ## Components
//! - `prepare`: Trimming, lower-casing and tokenizing the raw prompt
//! - `category`: Ordered first-match topic classification
//! - `keywords`: Stop-word filtered keyword extraction
//! - `complexity`: Three-level complexity estimate
//! - `tone`: Enthusiastic / formal / neutral detection
//! - `prompt_analysis`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod category;
pub mod complexity;
pub mod keywords;
pub mod prepare;
pub mod prompt_analysis;
pub mod tone;

pub use analyzer::PromptAnalyzer;
pub use category::{Category, CategoryClassifier, CategoryMatch};
pub use complexity::{ComplexityLevel, ComplexityScorer};
pub use keywords::{KeywordExtractor, MAX_KEYWORDS};
pub use prepare::{prepare_prompt, PreparedPrompt};
pub use prompt_analysis::{PromptAnalysis, FALLBACK_TOPIC};
pub use tone::{Tone, ToneDetector};
