// src/news/types.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::NewsCategory;

/// One normalized news record shown to the user.
///
/// Ids are positional and unique only within the batch that produced them;
/// a fresh fetch assigns fresh ids. Nothing is ever persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub published_at: DateTime<Utc>,
    pub category: NewsCategory,
}

impl NewsItem {
    /// Map one upstream article into the display model.
    ///
    /// The id is positional (`{slug}-{index}`). A missing description stays
    /// absent; substituting placeholder text is a render-time concern.
    pub fn from_article(article: Article, category: NewsCategory, index: usize) -> NewsItem {
        let published_at = DateTime::parse_from_rfc3339(&article.published_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        NewsItem {
            id: format!("{}-{}", category.slug(), index),
            title: article.title,
            source: article.source.name,
            url: article.url,
            image_url: article.url_to_image,
            description: article.description,
            published_at,
            category,
        }
    }
}

/// Wire shape of one article from the "everything" search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub source: ArticleSource,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

/// Failures from the live search path. Kept as a typed error so the fetch
/// outcome can carry the reason instead of swallowing it.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search provider returned HTTP status {0}")]
    Status(u16),
    #[error("search provider reported status '{0}'")]
    Provider(String),
}

/// Backend issuing one bounded search request. The HTTP client implements
/// this; tests substitute stubs.
#[async_trait]
pub trait ArticleSearch: Send + Sync {
    async fn search(&self, query: &str, page_size: usize) -> Result<Vec<Article>, SearchError>;
    fn name(&self) -> &'static str;
}
