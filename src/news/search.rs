// src/news/search.rs
//! HTTP client for the "everything" search endpoint (NewsAPI wire shape).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::news::types::{Article, ArticleSearch, SearchError};

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://newsapi.org/v2";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: String,
    #[allow(dead_code)]
    #[serde(rename = "totalResults")]
    total_results: Option<u32>,
    #[serde(default)]
    articles: Vec<Article>,
    message: Option<String>,
}

pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("ai-news-hub/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(10))
            .build()
            .expect("reqwest client");
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ArticleSearch for SearchClient {
    async fn search(&self, query: &str, page_size: usize) -> Result<Vec<Article>, SearchError> {
        let url = format!("{}/everything", self.base_url);
        let page_size = page_size.to_string();
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("q", query),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(SearchError::Status(resp.status().as_u16()));
        }

        let body: SearchResponse = resp.json().await?;
        if body.status != "ok" {
            let detail = body.message.unwrap_or(body.status);
            return Err(SearchError::Provider(detail));
        }
        Ok(body.articles)
    }

    fn name(&self) -> &'static str {
        "newsapi"
    }
}
