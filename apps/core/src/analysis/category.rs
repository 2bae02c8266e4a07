//! Topic Category Classification.
//!
//! Ordered first-match classification over fixed keyword tables.
//! Matching is plain substring containment on the normalized prompt, so
//! "apple" counts as a hit for "app".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topical bucket used to pick a template variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Business,
    Creative,
    Education,
    Lifestyle,
    /// No keyword table matched
    Uncategorized,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// Returns the lowercase label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Creative => "creative",
            Category::Education => "education",
            Category::Lifestyle => "lifestyle",
            Category::Uncategorized => "uncategorized",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technology" => Ok(Category::Technology),
            "business" => Ok(Category::Business),
            "creative" => Ok(Category::Creative),
            "education" => Ok(Category::Education),
            "lifestyle" => Ok(Category::Lifestyle),
            "uncategorized" | "" => Ok(Category::Uncategorized),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// Keyword table definition for one category
struct CategoryKeywords {
    category: Category,
    keywords: &'static [&'static str],
}

/// Priority order matters: the first table with a hit wins.
const CATEGORY_TABLE: &[CategoryKeywords] = &[
    CategoryKeywords {
        category: Category::Technology,
        keywords: &[
            "app", "website", "software", "program", "code", "system", "platform", "database",
            "api", "algorithm",
        ],
    },
    CategoryKeywords {
        category: Category::Business,
        keywords: &[
            "business", "company", "startup", "marketing", "strategy", "plan", "project", "team",
            "product", "service",
        ],
    },
    CategoryKeywords {
        category: Category::Creative,
        keywords: &[
            "story",
            "poem",
            "art",
            "design",
            "creative",
            "imagination",
            "fantasy",
            "adventure",
            "character",
            "world",
        ],
    },
    CategoryKeywords {
        category: Category::Education,
        keywords: &[
            "learning",
            "study",
            "education",
            "course",
            "lesson",
            "tutorial",
            "guide",
            "explanation",
            "concept",
            "theory",
        ],
    },
    CategoryKeywords {
        category: Category::Lifestyle,
        keywords: &[
            "health", "fitness", "cooking", "travel", "fashion", "beauty", "home", "garden",
            "hobby", "sport",
        ],
    },
];

/// Result of category classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    /// Winning category
    pub category: Category,
    /// Keyword that triggered the match, if any
    pub matched_keyword: Option<String>,
}

/// Category classifier over the fixed keyword tables
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryClassifier;

impl CategoryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a normalized (trimmed, lower-cased) prompt
    pub fn classify(&self, prompt: &str) -> CategoryMatch {
        for entry in CATEGORY_TABLE {
            if let Some(keyword) = entry.keywords.iter().find(|k| prompt.contains(**k)) {
                return CategoryMatch {
                    category: entry.category,
                    matched_keyword: Some((*keyword).to_string()),
                };
            }
        }

        CategoryMatch {
            category: Category::Uncategorized,
            matched_keyword: None,
        }
    }

    /// Keywords registered for a category (empty for `Uncategorized`)
    pub fn keywords_for(category: Category) -> &'static [&'static str] {
        CATEGORY_TABLE
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.keywords)
            .unwrap_or(&[])
    }
}
