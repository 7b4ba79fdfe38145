// src/api.rs
//! Public HTTP surface: news feeds, trend views, channel sharing, and the
//! summarizer key admin endpoints.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::category::NewsCategory;
use crate::config::AppConfig;
use crate::credentials::{resolve_summary_key, KeyStore};
use crate::news::search::SearchClient;
use crate::news::types::NewsItem;
use crate::news::{FetchOrigin, NewsService};
use crate::notify::channel::ChannelNotifier;
use crate::notify::{ShareReceipt, DEFAULT_CHANNEL};
use crate::summarize::SummaryClient;
use crate::trends::{KeywordTrend, TechTerm, TrendsService, WeeklySummary};

const DEFAULT_FEED_LIMIT: usize = 10;

#[derive(Clone)]
pub struct AppState {
    pub news: Arc<NewsService>,
    pub trends: Arc<TrendsService>,
    pub summarizer: Arc<RwLock<SummaryClient>>,
    pub notifier: Arc<ChannelNotifier>,
    pub keys: Arc<KeyStore>,
}

impl AppState {
    /// Wire every service from the loaded configuration. The summarizer key
    /// is resolved once here (stored key, then environment); business logic
    /// below never touches ambient globals.
    pub fn from_config(cfg: &AppConfig) -> Self {
        let keys = Arc::new(KeyStore::new(cfg.credentials_path.clone()));
        let summary_key = resolve_summary_key(None, &keys);
        let summarizer = Arc::new(RwLock::new(SummaryClient::new(
            cfg.summary_base_url.clone(),
            cfg.summary_model.clone(),
            summary_key,
        )));

        let news = if cfg.live_search_enabled() {
            let key = cfg.search_api_key.clone().unwrap_or_default();
            Arc::new(NewsService::live(Arc::new(SearchClient::new(
                cfg.search_base_url.clone(),
                key,
            ))))
        } else {
            Arc::new(NewsService::mock())
        };

        let trends = Arc::new(TrendsService::new(
            news.clone(),
            summarizer.clone(),
            Duration::from_millis(cfg.trends_latency_ms),
        ));
        let notifier = Arc::new(ChannelNotifier::new(Duration::from_millis(
            cfg.share_latency_ms,
        )));

        Self {
            news,
            trends,
            summarizer,
            notifier,
            keys,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/news", get(list_news))
        .route("/news/{id}", get(news_by_id))
        .route("/trends/summary", get(trends_summary))
        .route("/trends/keywords", get(trends_keywords))
        .route("/trends/terms", get(trends_terms))
        .route("/share", post(share))
        .route("/admin/api-key", put(set_api_key).delete(clear_api_key))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct NewsQuery {
    category: Option<String>,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct NewsFeedOut {
    category: NewsCategory,
    origin: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    items: Vec<NewsItem>,
}

async fn list_news(
    State(state): State<AppState>,
    Query(q): Query<NewsQuery>,
) -> Json<NewsFeedOut> {
    let category = NewsCategory::from_slug(q.category.as_deref().unwrap_or_default());
    let limit = q.limit.unwrap_or(DEFAULT_FEED_LIMIT);
    let fetched = state.news.fetch(category, limit).await;

    let error = match &fetched.origin {
        FetchOrigin::LiveFailed(e) => Some(e.to_string()),
        _ => None,
    };
    Json(NewsFeedOut {
        category,
        origin: fetched.origin.as_str(),
        error,
        items: fetched.items,
    })
}

async fn news_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NewsItem>, StatusCode> {
    match state.news.find_by_id(&id).await {
        Some(item) => Ok(Json(item)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn trends_summary(State(state): State<AppState>) -> Json<WeeklySummary> {
    Json(state.trends.weekly_summary().await)
}

async fn trends_keywords(State(state): State<AppState>) -> Json<Vec<KeywordTrend>> {
    Json(state.trends.top_keywords().await)
}

async fn trends_terms(State(state): State<AppState>) -> Json<Vec<TechTerm>> {
    Json(state.trends.tech_terms().await)
}

fn default_channel() -> String {
    DEFAULT_CHANNEL.to_string()
}

#[derive(Deserialize)]
struct ShareReq {
    #[serde(default = "default_channel")]
    channel: String,
    #[serde(flatten)]
    payload: SharePayload,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum SharePayload {
    News { item: NewsItem },
    Summary { text: String },
    Keywords { keywords: Vec<KeywordTrend> },
    Terms { terms: Vec<TechTerm> },
}

async fn share(State(state): State<AppState>, Json(req): Json<ShareReq>) -> Json<ShareReceipt> {
    let receipt = match &req.payload {
        SharePayload::News { item } => state.notifier.share_news(item, &req.channel).await,
        SharePayload::Summary { text } => state.notifier.share_summary(text, &req.channel).await,
        SharePayload::Keywords { keywords } => {
            state.notifier.share_keywords(keywords, &req.channel).await
        }
        SharePayload::Terms { terms } => state.notifier.share_terms(terms, &req.channel).await,
    };
    Json(receipt)
}

#[derive(Deserialize)]
struct ApiKeyReq {
    api_key: String,
}

async fn set_api_key(
    State(state): State<AppState>,
    Json(req): Json<ApiKeyReq>,
) -> Result<&'static str, (StatusCode, String)> {
    if req.api_key.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "api_key must not be empty".into()));
    }
    state
        .keys
        .save(&req.api_key)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    state
        .summarizer
        .write()
        .expect("summarizer lock poisoned")
        .set_api_key(Some(req.api_key));
    Ok("saved")
}

async fn clear_api_key(
    State(state): State<AppState>,
) -> Result<&'static str, (StatusCode, String)> {
    state
        .keys
        .clear()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    state
        .summarizer
        .write()
        .expect("summarizer lock poisoned")
        .set_api_key(None);
    Ok("cleared")
}
