//! Image Search Query Planning.
//!
//! Builds the ordered list of free-image-search queries used when no
//! generation API is available. Only the planning lives here; fetching is up
//! to the caller.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Prompt keywords kept before style keywords are appended
const MAX_SEARCH_KEYWORDS: usize = 5;

/// Queries tried, in order, when every planned query comes back empty
pub const FALLBACK_QUERIES: [&str; 4] = ["nature", "landscape", "art", "photography"];

const SEARCH_STOPWORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "a", "an", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "must",
];

// Generation-only phrasing that hurts stock-photo search. Alternation order is
// leftmost-first, so "artistic" wins over "artistic composition".
static GENERATION_PHRASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)highly detailed|photorealistic|professional photography|sharp focus|high resolution|8k quality|masterpiece|artistic|creative|painterly style|vibrant colors|artistic composition|trending on artstation|cartoon style|animated|cute|clean lines|bright colors|cartoon illustration|disney style|abstract art|modern|contemporary|geometric shapes|artistic expression|abstract composition|modern art",
    )
    .expect("Invalid regex: generation phrases")
});

// ASCII word characters only, so accented letters split words
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("Invalid regex: non-word characters"));

/// Visual style requested for an image
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    #[default]
    Realistic,
    Artistic,
    Cartoon,
    Abstract,
}

impl ImageStyle {
    pub const ALL: [ImageStyle; 4] = [
        ImageStyle::Realistic,
        ImageStyle::Artistic,
        ImageStyle::Cartoon,
        ImageStyle::Abstract,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ImageStyle::Realistic => "realistic",
            ImageStyle::Artistic => "artistic",
            ImageStyle::Cartoon => "cartoon",
            ImageStyle::Abstract => "abstract",
        }
    }

    /// Search terms appended for this style. Never empty.
    pub fn search_keywords(&self) -> &'static [&'static str] {
        match self {
            ImageStyle::Realistic => &["photography", "realistic", "detailed", "professional"],
            ImageStyle::Artistic => &["art", "painting", "artistic", "creative", "digital art"],
            ImageStyle::Cartoon => &["cartoon", "animated", "illustration", "cute", "drawing"],
            ImageStyle::Abstract => &["abstract", "modern", "art", "geometric", "contemporary"],
        }
    }
}

impl fmt::Display for ImageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ImageStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ImageStyle::ALL
            .into_iter()
            .find(|style| style.label() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown image style '{}' (expected realistic, artistic, cartoon or abstract)",
                    s.trim()
                )
            })
    }
}

/// Ordered search plan for one prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSearchPlan {
    /// Prompt keywords followed by style keywords
    pub keywords: Vec<String>,
    /// Queries to try in order
    pub queries: Vec<String>,
    /// Broad queries tried after every planned query failed
    pub fallback_queries: Vec<String>,
}

impl ImageSearchPlan {
    /// Keyword used to rank returned images by description match
    pub fn primary_keyword(&self) -> Option<&str> {
        self.keywords.first().map(String::as_str)
    }
}

/// Plan search queries for a prompt and image style
pub fn plan_image_search(prompt: &str, style: ImageStyle) -> ImageSearchPlan {
    let lowered = prompt.to_lowercase();
    let stripped = GENERATION_PHRASES.replace_all(&lowered, "");
    let cleaned = NON_WORD.replace_all(&stripped, " ");

    let mut keywords: Vec<String> = cleaned
        .split(' ')
        .filter(|word| word.chars().count() > 2 && !SEARCH_STOPWORDS.contains(word))
        .take(MAX_SEARCH_KEYWORDS)
        .map(str::to_string)
        .collect();

    let style_keywords = style.search_keywords();
    keywords.extend(style_keywords.iter().map(|k| k.to_string()));

    let prefix = |n: usize| keywords.iter().take(n).cloned().collect::<Vec<_>>().join(" ");
    let candidates = [
        keywords.join(" "),
        prefix(3),
        format!("{} {}", prefix(2), style_keywords[0]),
    ];

    let queries = candidates
        .into_iter()
        .filter(|query| query.trim().chars().count() >= 2)
        .collect();

    ImageSearchPlan {
        keywords,
        queries,
        fallback_queries: FALLBACK_QUERIES.iter().map(|q| q.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_strips_generation_phrases() {
        let plan = plan_image_search("A cute cat on the beach", ImageStyle::Cartoon);

        assert_eq!(&plan.keywords[..2], &["cat", "beach"]);
        assert_eq!(plan.queries.len(), 3);
        assert_eq!(plan.queries[1], "cat beach cartoon");
        assert!(plan.queries[2].ends_with("cartoon"));
        assert_eq!(plan.primary_keyword(), Some("cat"));
    }

    #[test]
    fn test_punctuation_becomes_space() {
        let plan = plan_image_search("sunset,mountains!", ImageStyle::Realistic);

        assert_eq!(&plan.keywords[..2], &["sunset", "mountains"]);
    }

    #[test]
    fn test_non_ascii_letters_dropped() {
        let plan = plan_image_search("café terrace", ImageStyle::Realistic);
        assert_eq!(plan.keywords[..2], ["caf", "terrace"]);
        assert_eq!(plan.keywords[2], "photography");
    }

    #[test]
    fn test_prompt_keywords_capped() {
        let plan = plan_image_search(
            "red blue green yellow purple orange black white",
            ImageStyle::Abstract,
        );

        let style_count = ImageStyle::Abstract.search_keywords().len();
        assert_eq!(plan.keywords.len(), MAX_SEARCH_KEYWORDS + style_count);
        assert_eq!(plan.keywords[4], "purple");
        assert_eq!(plan.keywords[5], "abstract");
    }

    #[test]
    fn test_empty_prompt_uses_style_only() {
        let plan = plan_image_search("", ImageStyle::Realistic);

        assert_eq!(plan.primary_keyword(), Some("photography"));
        assert_eq!(plan.queries[2], "photography realistic photography");
        assert_eq!(plan.fallback_queries, FALLBACK_QUERIES);
    }

    #[test]
    fn test_parse_image_style() {
        assert_eq!("Cartoon".parse::<ImageStyle>(), Ok(ImageStyle::Cartoon));
        assert!("sketch".parse::<ImageStyle>().is_err());
    }
}
