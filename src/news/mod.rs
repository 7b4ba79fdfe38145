// src/news/mod.rs
pub mod mock;
pub mod search;
pub mod types;

use std::sync::Arc;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use once_cell::sync::OnceCell;

use crate::category::NewsCategory;
use crate::news::mock::MockFeed;
use crate::news::types::{ArticleSearch, NewsItem, SearchError};

/// Batch size used per category when resolving an id (matches the original
/// overview page batch).
const LOOKUP_BATCH: usize = 20;

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("news_fetch_total", "Total fetch calls, any backend.");
        describe_counter!(
            "news_fetch_live_errors_total",
            "Live search calls that failed and yielded an empty batch."
        );
        describe_counter!(
            "news_lookup_miss_total",
            "Lookups by id that found no item in the regenerated batches."
        );
        describe_gauge!("news_last_fetch_ts", "Unix ts of the last fetch call.");
    });
}

/// Where a batch of items came from. `LiveFailed` still carries an empty item
/// list to the caller; the reason stays inspectable here.
#[derive(Debug)]
pub enum FetchOrigin {
    Mock,
    Live,
    LiveFailed(SearchError),
}

impl FetchOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchOrigin::Mock => "mock",
            FetchOrigin::Live => "live",
            FetchOrigin::LiveFailed(_) => "live-failed",
        }
    }
}

/// Result of one fetch call: the items plus their provenance.
#[derive(Debug)]
pub struct Fetched {
    pub items: Vec<NewsItem>,
    pub origin: FetchOrigin,
}

enum Backend {
    Mock,
    Live(Arc<dyn ArticleSearch>),
}

/// Category-scoped aggregation pipeline.
///
/// Mock mode is the default whenever no search credential is configured; the
/// live path issues exactly one bounded request and degrades to an empty
/// batch on failure. No retries, no partial results, no mock fallback from
/// the live path.
pub struct NewsService {
    backend: Backend,
    feed: MockFeed,
}

impl NewsService {
    pub fn mock() -> Self {
        Self {
            backend: Backend::Mock,
            feed: MockFeed::default(),
        }
    }

    pub fn live(search: Arc<dyn ArticleSearch>) -> Self {
        Self {
            backend: Backend::Live(search),
            feed: MockFeed::default(),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.backend, Backend::Live(_))
    }

    /// Fetch up to `limit` items for `category`.
    pub async fn fetch(&self, category: NewsCategory, limit: usize) -> Fetched {
        ensure_metrics_described();
        counter!("news_fetch_total").increment(1);
        gauge!("news_last_fetch_ts").set(chrono::Utc::now().timestamp() as f64);

        match &self.backend {
            Backend::Mock => Fetched {
                items: self.feed.generate(category, limit),
                origin: FetchOrigin::Mock,
            },
            Backend::Live(search) => match search.search(category.query(), limit).await {
                Ok(articles) => {
                    let items = articles
                        .into_iter()
                        .take(limit)
                        .enumerate()
                        .map(|(i, a)| NewsItem::from_article(a, category, i))
                        .collect();
                    Fetched {
                        items,
                        origin: FetchOrigin::Live,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = ?e, provider = search.name(), category = %category, "live fetch failed");
                    counter!("news_fetch_live_errors_total").increment(1);
                    Fetched {
                        items: Vec::new(),
                        origin: FetchOrigin::LiveFailed(e),
                    }
                }
            },
        }
    }

    /// Resolve one item by id by regenerating a fixed batch per category.
    ///
    /// Best-effort by contract: ids are assigned per batch, so an id minted by
    /// an earlier, unrelated fetch may legitimately miss. The live path has no
    /// id index at all and always misses.
    pub async fn find_by_id(&self, id: &str) -> Option<NewsItem> {
        ensure_metrics_described();
        if self.is_live() {
            counter!("news_lookup_miss_total").increment(1);
            return None;
        }

        let found = NewsCategory::all()
            .iter()
            .flat_map(|c| self.feed.generate(*c, LOOKUP_BATCH))
            .find(|item| item.id == id);
        if found.is_none() {
            counter!("news_lookup_miss_total").increment(1);
        }
        found
    }
}
