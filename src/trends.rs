// src/trends.rs
//! Derived views over fetched content: weekly summary, keyword trends, and
//! the tech glossary.
//!
//! The summary is the only view that calls out; it degrades to a static
//! paragraph on any failure and never surfaces the error to the caller. The
//! keyword and glossary views serve canned data behind a simulated-latency
//! contract that a real analysis backend would replace.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::category::NewsCategory;
use crate::news::NewsService;
use crate::summarize::{SummaryClient, SummaryRequest};

/// Items pulled for the summary input batch.
const SUMMARY_FETCH_LIMIT: usize = 15;
/// Target summary length in characters.
const SUMMARY_MAX_LENGTH: usize = 300;

pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(500);

static FALLBACK_SUMMARY: &str = "This week in AI saw significant advancements in large language models with OpenAI releasing improved capabilities for GPT models. Google researchers published breakthrough findings in multimodal learning, combining image and text processing in novel ways. Meanwhile, ethical concerns dominated discussions as major tech companies formed a consortium to establish industry-wide AI standards. Robotics saw continued innovation with autonomous delivery solutions gaining traction. On the business front, AI startups secured record-breaking funding rounds, highlighting the sector's robust growth despite broader economic uncertainties.";

fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "trends_summary_fallback_total",
            "Weekly summaries served from the static fallback."
        );
        describe_counter!(
            "trends_summary_generated_total",
            "Weekly summaries produced by the summarizer."
        );
    });
}

/// How a weekly summary was produced. Fallbacks keep the reason so tests and
/// logs can see why the external call was skipped or failed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryOrigin {
    Generated,
    Fallback { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklySummary {
    pub date: DateTime<Utc>,
    pub summary: String,
    pub origin: SummaryOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRef {
    pub title: String,
    pub url: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTrend {
    pub keyword: String,
    pub count: u32,
    pub trend: TrendDirection,
    pub articles: Vec<ArticleRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechTerm {
    pub term: String,
    pub definition: String,
    pub mention_count: u32,
}

pub struct TrendsService {
    news: Arc<NewsService>,
    summarizer: Arc<RwLock<SummaryClient>>,
    simulated_latency: Duration,
}

impl TrendsService {
    pub fn new(
        news: Arc<NewsService>,
        summarizer: Arc<RwLock<SummaryClient>>,
        simulated_latency: Duration,
    ) -> Self {
        Self {
            news,
            summarizer,
            simulated_latency,
        }
    }

    /// Build the weekly summary: broad fetch, concatenate, summarize.
    /// Any failure, the absent credential included, yields the static
    /// fallback with the current timestamp.
    pub async fn weekly_summary(&self) -> WeeklySummary {
        ensure_metrics_described();

        let fetched = self
            .news
            .fetch(NewsCategory::Overview, SUMMARY_FETCH_LIMIT)
            .await;
        let content = fetched
            .items
            .iter()
            .map(|item| {
                format!(
                    "Title: {}\nSource: {}\nDescription: {}",
                    item.title,
                    item.source,
                    item.description.as_deref().unwrap_or_default()
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        // Clone the client out of the lock; the guard must not cross an await.
        let client = self
            .summarizer
            .read()
            .expect("summarizer lock poisoned")
            .clone();
        let req = SummaryRequest::new(content).with_max_length(SUMMARY_MAX_LENGTH);

        match client.generate_summary(&req).await {
            Ok(summary) => {
                counter!("trends_summary_generated_total").increment(1);
                WeeklySummary {
                    date: Utc::now(),
                    summary,
                    origin: SummaryOrigin::Generated,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "summary generation failed, serving fallback");
                counter!("trends_summary_fallback_total").increment(1);
                WeeklySummary {
                    date: Utc::now(),
                    summary: FALLBACK_SUMMARY.to_string(),
                    origin: SummaryOrigin::Fallback {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    /// Ranked keyword list. Canned data; a real implementation would run
    /// frequency analysis over fetched items.
    pub async fn top_keywords(&self) -> Vec<KeywordTrend> {
        tokio::time::sleep(self.simulated_latency).await;
        canned_keywords()
    }

    /// Glossary of recurring terms, same simulated-latency contract.
    pub async fn tech_terms(&self) -> Vec<TechTerm> {
        tokio::time::sleep(self.simulated_latency).await;
        canned_terms()
    }
}

fn article(title: &str, url: &str, source: &str) -> ArticleRef {
    ArticleRef {
        title: title.to_string(),
        url: url.to_string(),
        source: source.to_string(),
    }
}

fn canned_keywords() -> Vec<KeywordTrend> {
    vec![
        KeywordTrend {
            keyword: "Large Language Models".to_string(),
            count: 142,
            trend: TrendDirection::Up,
            articles: vec![
                article(
                    "OpenAI Releases New Version of GPT with Enhanced Reasoning",
                    "https://example.com/article1",
                    "TechCrunch",
                ),
                article(
                    "Microsoft Integrates Advanced LLMs into Office Suite",
                    "https://example.com/article2",
                    "The Verge",
                ),
                article(
                    "Anthropic's Claude 3 Sets New Benchmarks in Reasoning Tasks",
                    "https://example.com/article3",
                    "VentureBeat",
                ),
            ],
        },
        KeywordTrend {
            keyword: "AI Ethics".to_string(),
            count: 98,
            trend: TrendDirection::Up,
            articles: vec![
                article(
                    "AI Ethics Board Established by Major Tech Companies",
                    "https://example.com/article4",
                    "MIT Technology Review",
                ),
                article(
                    "EU Proposes New AI Regulations for High-Risk Applications",
                    "https://example.com/article5",
                    "Financial Times",
                ),
                article(
                    "Bias in Healthcare AI Systems Raises Concerns Among Researchers",
                    "https://example.com/article6",
                    "Nature",
                ),
            ],
        },
        KeywordTrend {
            keyword: "Computer Vision".to_string(),
            count: 87,
            trend: TrendDirection::Stable,
            articles: vec![
                article(
                    "Meta's Advanced Object Recognition System Outperforms Competitors",
                    "https://example.com/article7",
                    "Wired",
                ),
                article(
                    "Computer Vision Applications in Autonomous Driving Reach New Milestone",
                    "https://example.com/article8",
                    "IEEE Spectrum",
                ),
                article(
                    "Real-time Object Tracking Made More Efficient with New Algorithm",
                    "https://example.com/article9",
                    "ArXiv Blog",
                ),
            ],
        },
        KeywordTrend {
            keyword: "AI Hardware".to_string(),
            count: 76,
            trend: TrendDirection::Up,
            articles: vec![
                article(
                    "NVIDIA Announces Next-Gen AI Chips with 4x Performance Improvement",
                    "https://example.com/article10",
                    "AnandTech",
                ),
                article(
                    "Apple's Neural Engine Gets Major Upgrade in Latest Devices",
                    "https://example.com/article11",
                    "MacRumors",
                ),
                article(
                    "Specialized AI Processors Show 70% Energy Efficiency Gains",
                    "https://example.com/article12",
                    "Tom's Hardware",
                ),
            ],
        },
        KeywordTrend {
            keyword: "Generative AI".to_string(),
            count: 112,
            trend: TrendDirection::Up,
            articles: vec![
                article(
                    "Stability AI Launches Revolutionary Image Generation Model",
                    "https://example.com/article13",
                    "PetaPixel",
                ),
                article(
                    "Music Generation Models Enter Mainstream Production",
                    "https://example.com/article14",
                    "Billboard",
                ),
                article(
                    "Text-to-Video Technology Reaches New Heights of Realism",
                    "https://example.com/article15",
                    "The Hollywood Reporter",
                ),
            ],
        },
    ]
}

fn term(term: &str, definition: &str, mention_count: u32) -> TechTerm {
    TechTerm {
        term: term.to_string(),
        definition: definition.to_string(),
        mention_count,
    }
}

fn canned_terms() -> Vec<TechTerm> {
    vec![
        term(
            "Large Language Model (LLM)",
            "An AI system trained on massive amounts of text data that can understand, summarize, generate, and predict new content. Examples include GPT-4, Claude, and Gemini.",
            215,
        ),
        term(
            "Multimodal Learning",
            "AI systems that can process and understand multiple types of data simultaneously, such as text, images, audio, and video, enabling more comprehensive understanding.",
            187,
        ),
        term(
            "Generative AI",
            "AI systems that can create new content, including text, images, music, and videos that didn't exist before, based on patterns learned from training data.",
            176,
        ),
        term(
            "Transformer Architecture",
            "A neural network design that uses attention mechanisms to process relationships between all words in a text, enabling more effective language understanding and generation.",
            142,
        ),
        term(
            "Fine-tuning",
            "The process of taking a pre-trained AI model and further training it on specific data to specialize in particular tasks or domains.",
            134,
        ),
        term(
            "Reinforcement Learning from Human Feedback (RLHF)",
            "A technique that uses human feedback to guide AI models toward more helpful, accurate, and safe responses, rather than just predicting the most likely next word.",
            128,
        ),
        term(
            "Neural Radiance Fields (NeRF)",
            "A technique for creating 3D scenes from 2D images by training neural networks to represent how light moves through space, enabling realistic 3D visualizations.",
            112,
        ),
        term(
            "Foundation Model",
            "Large AI models trained on broad data that serve as a base for many different applications and can be adapted to specific tasks with minimal additional training.",
            98,
        ),
        term(
            "AI Hallucination",
            "When AI systems generate information that sounds plausible but is factually incorrect or made up, often because they're predicting patterns rather than retrieving facts.",
            94,
        ),
        term(
            "Prompt Engineering",
            "The practice of crafting effective inputs or instructions for AI systems to get desired outputs, becoming an important skill as generative AI becomes more widespread.",
            89,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_views_have_fixed_sizes() {
        assert_eq!(canned_keywords().len(), 5);
        assert_eq!(canned_terms().len(), 10);
    }

    #[test]
    fn every_keyword_carries_supporting_articles() {
        for kw in canned_keywords() {
            assert!(!kw.articles.is_empty(), "{} has no articles", kw.keyword);
        }
    }
}
