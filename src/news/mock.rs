// src/news/mock.rs
//! Deterministic-shape, randomized-content stand-in for the live search call.
//!
//! Every item is assembled from category-scoped template pools. The random
//! source is injected so tests can seed a `StdRng` and assert exact output;
//! production callers use [`MockFeed::generate`], which draws from the thread
//! RNG.

use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::category::NewsCategory;
use crate::news::types::NewsItem;

const MOCK_ARTICLE_URL: &str = "https://example.com/article";

/// Shared pool of source names.
pub const SOURCES: &[&str] = &[
    "AI Today",
    "TechCrunch",
    "ML Weekly",
    "AI Research",
    "The Verge",
    "Wired",
    "MIT Technology Review",
];

/// Shared pool of image URLs.
pub const IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1620712943543-bcc4688e7485",
    "https://images.unsplash.com/photo-1677442135126-21d016522c5f",
    "https://images.unsplash.com/photo-1701368041245-3361ff1edf89",
    "https://images.unsplash.com/photo-1684423301294-7308ae328a70",
    "https://images.unsplash.com/photo-1589254065878-42c9da997008",
];

/// Title-prefix templates scoped to a category.
pub fn title_prefixes(category: NewsCategory) -> &'static [&'static str] {
    match category {
        NewsCategory::Overview => &[
            "AI Trends",
            "Tech News",
            "Weekly Roundup",
            "Industry Updates",
        ],
        NewsCategory::Technical => &[
            "Researchers Develop",
            "New Algorithm Enhances",
            "Google DeepMind Announces",
            "Breakthrough in",
            "OpenAI Publishes Research on",
            "Meta AI Advances",
            "Novel Approach to",
            "Improving Large Language Models:",
            "Efficiency Gains in",
        ],
        NewsCategory::Business => &[
            "AI Startup Raises",
            "Microsoft Invests in",
            "Google Partners with",
            "Amazon Launches",
            "Investors Back",
            "Enterprise Adoption of",
            "Market Growth in",
            "Quarterly Report Shows",
            "Business Impact:",
        ],
        NewsCategory::Ethics => &[
            "New Policy on",
            "Ethical Guidelines for",
            "Addressing Bias in",
            "Regulation Proposed for",
            "Study Reveals Issues with",
            "Transparency Report on",
            "Privacy Concerns in",
            "Accountability Framework for",
            "Industry Leaders Commit to",
        ],
        NewsCategory::Products => &[
            "New Version of",
            "Introducing",
            "Product Launch:",
            "Updated Features in",
            "Beta Release:",
            "Developer Preview:",
            "AI-Powered Tool",
            "Platform Update:",
            "User Experience Improvements in",
        ],
    }
}

/// Title-suffix templates scoped to a category.
pub fn title_suffixes(category: NewsCategory) -> &'static [&'static str] {
    match category {
        NewsCategory::Overview => &["in AI", "This Week", "for Developers", "You Should Know About"],
        NewsCategory::Technical => &[
            "Neural Networks",
            "Transformer Architecture",
            "Image Generation",
            "Language Understanding",
            "Training Efficiency",
            "Model Compression",
            "Few-Shot Learning",
            "Multimodal Systems",
            "Reinforcement Learning",
        ],
        NewsCategory::Business => &[
            "$100M in Funding",
            "Enterprise AI Solutions",
            "Strategic Partnership",
            "AI Infrastructure",
            "Financial Performance",
            "Market Position",
            "Customer Adoption Rates",
            "Industry Verticalization",
            "Workforce Transformation",
        ],
        NewsCategory::Ethics => &[
            "Facial Recognition",
            "AI Governance",
            "Data Privacy",
            "Algorithmic Bias",
            "Decision-Making Systems",
            "AI Safety Standards",
            "Autonomous Systems",
            "Personal Data Usage",
            "Content Moderation",
        ],
        NewsCategory::Products => &[
            "ChatGPT",
            "Stable Diffusion",
            "GitHub Copilot",
            "DALL-E",
            "Claude",
            "Midjourney",
            "AutoGPT",
            "Gemini",
            "Audio Generation Tools",
        ],
    }
}

fn description_templates(category: NewsCategory) -> &'static [&'static str] {
    match category {
        NewsCategory::Overview => &[
            "An overview of the latest developments in AI and machine learning.",
            "Weekly roundup of important AI news and breakthroughs.",
            "A summary of key happenings in the AI industry this week.",
        ],
        NewsCategory::Technical => &[
            "This research presents a novel approach to improving model performance while reducing computational requirements.",
            "The paper demonstrates significant advancements in reasoning capabilities of large language models.",
            "A new technique for training neural networks shows promising results on benchmark datasets.",
            "Researchers have developed an innovative method addressing key limitations in current AI systems.",
            "The latest breakthrough could have implications for various applications in natural language processing.",
        ],
        NewsCategory::Business => &[
            "The funding round will accelerate development of enterprise AI solutions for various industries.",
            "This strategic partnership aims to bring advanced AI capabilities to a wider business audience.",
            "Market analysis shows accelerating adoption of AI technologies across Fortune 500 companies.",
            "The company reported strong growth in its AI division, highlighting increased enterprise demand.",
            "Industry experts predict significant business transformation driven by these AI developments.",
        ],
        NewsCategory::Ethics => &[
            "New guidelines aim to ensure responsible development and deployment of AI systems.",
            "The policy framework addresses growing concerns about algorithmic bias and transparency.",
            "Researchers highlight ethical considerations for next-generation AI technologies.",
            "The proposed regulation seeks to balance innovation with necessary safeguards.",
            "Independent auditing of AI systems becomes central to ensuring fairness and accountability.",
        ],
        NewsCategory::Products => &[
            "The new version includes significant improvements to user experience and capabilities.",
            "This AI-powered tool promises to streamline workflows for developers and content creators.",
            "Early access users report substantial productivity gains from the newly launched features.",
            "The updated platform introduces several highly requested capabilities for enterprise users.",
            "This product launch represents a major advancement in making AI tools more accessible.",
        ],
    }
}

/// Mock content generator backed by the template pools above.
#[derive(Debug, Clone)]
pub struct MockFeed {
    /// Probability that a generated item carries no image.
    image_omit_probability: f64,
}

impl Default for MockFeed {
    fn default() -> Self {
        Self {
            image_omit_probability: 0.2,
        }
    }
}

impl MockFeed {
    pub fn new(image_omit_probability: f64) -> Self {
        Self {
            image_omit_probability: image_omit_probability.clamp(0.0, 1.0),
        }
    }

    /// Generate `count` items for `category` from the thread RNG.
    pub fn generate(&self, category: NewsCategory, count: usize) -> Vec<NewsItem> {
        self.generate_with(&mut rand::rng(), category, count)
    }

    /// Generate `count` items for `category` from the supplied RNG.
    ///
    /// Items come back in insertion order (index 0..count), not chronological.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        category: NewsCategory,
        count: usize,
    ) -> Vec<NewsItem> {
        self.generate_at(rng, Utc::now(), category, count)
    }

    /// Like [`generate_with`](Self::generate_with), anchored to an explicit
    /// reference instant so a seeded RNG reproduces a batch exactly.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: DateTime<Utc>,
        category: NewsCategory,
        count: usize,
    ) -> Vec<NewsItem> {
        (0..count)
            .map(|i| {
                let prefix = pick(rng, title_prefixes(category));
                let suffix = pick(rng, title_suffixes(category));
                let description = pick(rng, description_templates(category));
                let source = pick(rng, SOURCES);
                let image_url = if rng.random_bool(self.image_omit_probability) {
                    None
                } else {
                    Some(pick(rng, IMAGES).to_string())
                };
                let published_at = now - Duration::days(rng.random_range(0..30));

                NewsItem {
                    id: format!("mock-{}-{}", category.slug(), i),
                    title: format!("{prefix} {suffix}"),
                    source: source.to_string(),
                    url: MOCK_ARTICLE_URL.to_string(),
                    image_url,
                    description: Some(description.to_string()),
                    published_at,
                    category,
                }
            })
            .collect()
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_pools_are_populated_for_every_category() {
        for c in NewsCategory::all() {
            assert!(!title_prefixes(*c).is_empty());
            assert!(!title_suffixes(*c).is_empty());
            assert!(!description_templates(*c).is_empty());
        }
        assert!(!SOURCES.is_empty());
        assert!(!IMAGES.is_empty());
    }

    #[test]
    fn omit_probability_one_never_yields_images() {
        let feed = MockFeed::new(1.0);
        let items = feed.generate(NewsCategory::Products, 25);
        assert!(items.iter().all(|it| it.image_url.is_none()));
    }
}
