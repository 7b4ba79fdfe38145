// src/category.rs
//! The closed set of content categories and their canned search queries.

use serde::{Deserialize, Serialize};

/// Topical bucket used to scope search queries and mock generation templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Overview,
    Technical,
    Business,
    Ethics,
    Products,
}

impl NewsCategory {
    /// All supported categories, in display order.
    pub fn all() -> &'static [NewsCategory] {
        &[
            NewsCategory::Overview,
            NewsCategory::Technical,
            NewsCategory::Business,
            NewsCategory::Ethics,
            NewsCategory::Products,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            NewsCategory::Overview => "overview",
            NewsCategory::Technical => "technical",
            NewsCategory::Business => "business",
            NewsCategory::Ethics => "ethics",
            NewsCategory::Products => "products",
        }
    }

    /// Lenient slug parsing: anything unrecognized lands on `Overview`.
    /// Category validation is a rendering concern, not an error.
    pub fn from_slug(slug: &str) -> NewsCategory {
        match slug.trim().to_ascii_lowercase().as_str() {
            "technical" => NewsCategory::Technical,
            "business" => NewsCategory::Business,
            "ethics" => NewsCategory::Ethics,
            "products" => NewsCategory::Products,
            _ => NewsCategory::Overview,
        }
    }

    /// Canned search query sent to the news provider for this category.
    /// `Overview` doubles as the catch-all query.
    pub fn query(&self) -> &'static str {
        match self {
            NewsCategory::Technical => {
                "artificial intelligence research OR machine learning research OR neural networks"
            }
            NewsCategory::Business => {
                "AI business OR artificial intelligence investment OR machine learning industry"
            }
            NewsCategory::Ethics => {
                "AI ethics OR artificial intelligence regulation OR machine learning bias"
            }
            NewsCategory::Products => {
                "new AI product OR artificial intelligence tool OR machine learning application"
            }
            NewsCategory::Overview => "artificial intelligence OR machine learning",
        }
    }
}

impl std::fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
