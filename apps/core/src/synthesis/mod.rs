//! # Synthesis Module
//!
//! Turns a prompt plus its `PromptAnalysis` into a formatted text block.
//!
//! - `style`: Writing styles (creative, professional, casual, academic)
//! - `templates`: Style → category template tables with per-style defaults
//! - `synthesizer`: Placeholder substitution
//! - `code` / `code_templates`: Starter code in JavaScript, Python, HTML or Java

pub mod code;
pub mod code_templates;
pub mod style;
pub mod synthesizer;
pub mod templates;

pub use code::{CodeIdentifiers, CodeLanguage, CodeSynthesizer, GeneratedCode};
pub use style::WritingStyle;
pub use synthesizer::TemplateSynthesizer;
pub use templates::{select_template, style_templates, StyleTemplates};
