//! Code Synthesizer.
//!
//! Produces a starter program for a prompt in one of four languages. Like the
//! text synthesizer it is pure and infallible: identifiers come from the
//! prompt's ASCII letters and digits, with a fixed fallback when there are
//! none.

use regex::Captures;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::code_templates::code_template;
use super::synthesizer::PLACEHOLDER;

/// Identifier base used when the prompt has no ASCII letters or digits
pub const FALLBACK_IDENTIFIER: &str = "generated";

/// Target language for generated code
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    #[default]
    JavaScript,
    Python,
    Html,
    Java,
}

impl CodeLanguage {
    pub const ALL: [CodeLanguage; 4] = [
        CodeLanguage::JavaScript,
        CodeLanguage::Python,
        CodeLanguage::Html,
        CodeLanguage::Java,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CodeLanguage::JavaScript => "javascript",
            CodeLanguage::Python => "python",
            CodeLanguage::Html => "html",
            CodeLanguage::Java => "java",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            CodeLanguage::JavaScript => "js",
            CodeLanguage::Python => "py",
            CodeLanguage::Html => "html",
            CodeLanguage::Java => "java",
        }
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CodeLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match wanted.as_str() {
            "js" => return Ok(CodeLanguage::JavaScript),
            "py" => return Ok(CodeLanguage::Python),
            _ => {}
        }
        CodeLanguage::ALL
            .into_iter()
            .find(|language| language.label() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown code language '{}' (expected javascript, python, html or java)",
                    s.trim()
                )
            })
    }
}

/// Identifiers derived from a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeIdentifiers {
    /// Letters and digits with the first letter upper-cased ("Todolist")
    pub class: String,
    /// Letters and digits, lower-cased ("todolist")
    pub ident: String,
    /// Lower-cased words joined by underscores ("todo_list")
    pub snake: String,
}

impl CodeIdentifiers {
    pub fn from_prompt(prompt: &str) -> Self {
        let compact: String = prompt.chars().filter(char::is_ascii_alphanumeric).collect();
        let compact = identifier_or_fallback(compact);

        let snake = prompt
            .to_ascii_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join("_");

        Self {
            class: capitalize_first(&compact),
            ident: compact.to_ascii_lowercase(),
            snake: identifier_or_fallback(snake),
        }
    }
}

// Identifiers may not start with a digit in any of the target languages
fn identifier_or_fallback(base: String) -> String {
    match base.chars().next() {
        None => FALLBACK_IDENTIFIER.to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", base),
        Some(_) => base,
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escape for a double- or single-quoted string literal
fn escape_string_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '"' | '\'' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Starter code for one prompt and language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCode {
    pub language: CodeLanguage,
    /// Prompt with whitespace collapsed to single spaces
    pub prompt: String,
    pub identifiers: CodeIdentifiers,
    pub file_name: String,
    pub code: String,
}

/// Fills the per-language code templates
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeSynthesizer;

impl CodeSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Produce starter code for `prompt` in `language`.
    pub fn synthesize(&self, prompt: &str, language: CodeLanguage) -> GeneratedCode {
        let prompt = prompt.split_whitespace().collect::<Vec<_>>().join(" ");
        let identifiers = CodeIdentifiers::from_prompt(&prompt);
        let code = self.render(code_template(language), &prompt, &identifiers);

        let stem = match language {
            CodeLanguage::Java => format!("{}Manager", identifiers.class),
            CodeLanguage::Python => identifiers.snake.clone(),
            CodeLanguage::JavaScript | CodeLanguage::Html => identifiers.ident.clone(),
        };

        GeneratedCode {
            language,
            file_name: format!("{}.{}", stem, language.extension()),
            prompt,
            identifiers,
            code,
        }
    }

    /// Fill one code template in a single pass; unknown placeholders are kept.
    pub fn render(&self, template: &str, prompt: &str, identifiers: &CodeIdentifiers) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
                "prompt" => prompt.to_string(),
                "title" => capitalize_first(prompt),
                "prompt_str" => escape_string_literal(prompt),
                "prompt_html" => escape_html(prompt),
                "class" => identifiers.class.clone(),
                "ident" => identifiers.ident.clone(),
                "snake" => identifiers.snake.clone(),
                _ => caps[0].to_string(),
            })
            .into_owned()
    }
}
