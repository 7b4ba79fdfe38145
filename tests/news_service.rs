// tests/news_service.rs
//
// Fetch pipeline semantics: mock delegation, live mapping, failure
// degradation, and the best-effort id lookup.

use std::sync::Arc;

use async_trait::async_trait;

use ai_news_hub::news::types::{Article, ArticleSearch, ArticleSource, SearchError};
use ai_news_hub::news::NewsService;
use ai_news_hub::{FetchOrigin, NewsCategory};

fn article(title: &str, description: Option<&str>) -> Article {
    Article {
        source: ArticleSource {
            id: None,
            name: "Reuters".to_string(),
        },
        title: title.to_string(),
        description: description.map(str::to_string),
        url: "https://example.test/a".to_string(),
        url_to_image: Some("https://example.test/a.jpg".to_string()),
        published_at: "2026-08-01T09:30:00Z".to_string(),
        content: Some("full text".to_string()),
    }
}

struct StubSearch {
    articles: Vec<Article>,
}

#[async_trait]
impl ArticleSearch for StubSearch {
    async fn search(&self, _query: &str, page_size: usize) -> Result<Vec<Article>, SearchError> {
        Ok(self.articles.iter().take(page_size).cloned().collect())
    }
    fn name(&self) -> &'static str {
        "stub"
    }
}

struct FailingSearch;

#[async_trait]
impl ArticleSearch for FailingSearch {
    async fn search(&self, _query: &str, _page_size: usize) -> Result<Vec<Article>, SearchError> {
        Err(SearchError::Provider("rateLimited".to_string()))
    }
    fn name(&self) -> &'static str {
        "failing-stub"
    }
}

#[tokio::test]
async fn limit_zero_returns_an_empty_batch_for_every_category() {
    let svc = NewsService::mock();
    for category in NewsCategory::all() {
        let fetched = svc.fetch(*category, 0).await;
        assert!(fetched.items.is_empty());
        assert!(matches!(fetched.origin, FetchOrigin::Mock));
    }
}

#[tokio::test]
async fn mock_fetch_honors_the_limit_and_tags_the_category() {
    let svc = NewsService::mock();
    let fetched = svc.fetch(NewsCategory::Technical, 5).await;
    assert_eq!(fetched.items.len(), 5);
    assert!(fetched.items.iter().all(|i| i.category == NewsCategory::Technical));
}

#[tokio::test]
async fn live_fetch_maps_articles_with_positional_ids() {
    let stub = StubSearch {
        articles: vec![
            article("First", Some("d1")),
            article("Second", None),
            article("Third", Some("d3")),
        ],
    };
    let svc = NewsService::live(Arc::new(stub));
    let fetched = svc.fetch(NewsCategory::Business, 10).await;

    assert!(matches!(fetched.origin, FetchOrigin::Live));
    assert_eq!(fetched.items.len(), 3);
    assert_eq!(fetched.items[0].id, "business-0");
    assert_eq!(fetched.items[1].id, "business-1");
    assert_eq!(fetched.items[0].source, "Reuters");
    // Missing description stays absent; render-time concern, not fetch-time.
    assert_eq!(fetched.items[1].description, None);
    assert!(fetched.items.iter().all(|i| i.category == NewsCategory::Business));
}

#[tokio::test]
async fn live_fetch_is_bounded_by_the_limit() {
    let stub = StubSearch {
        articles: (0..10).map(|i| article(&format!("t{i}"), None)).collect(),
    };
    let svc = NewsService::live(Arc::new(stub));
    let fetched = svc.fetch(NewsCategory::Overview, 3).await;
    assert_eq!(fetched.items.len(), 3);
}

#[tokio::test]
async fn live_failure_degrades_to_an_empty_batch_with_the_reason() {
    let svc = NewsService::live(Arc::new(FailingSearch));
    let fetched = svc.fetch(NewsCategory::Ethics, 10).await;

    assert!(fetched.items.is_empty());
    match fetched.origin {
        FetchOrigin::LiveFailed(e) => {
            assert!(e.to_string().contains("rateLimited"));
        }
        other => panic!("expected LiveFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn find_by_id_hits_ids_inside_the_regenerated_batch() {
    let svc = NewsService::mock();
    // Ids are positional, so any index below the per-category batch size
    // resolves regardless of the randomized content.
    let item = svc.find_by_id("mock-technical-2").await.expect("lookup hit");
    assert_eq!(item.id, "mock-technical-2");
    assert_eq!(item.category, NewsCategory::Technical);
}

#[tokio::test]
async fn find_by_id_misses_outside_the_batch_or_for_garbage() {
    let svc = NewsService::mock();
    assert!(svc.find_by_id("mock-technical-99").await.is_none());
    assert!(svc.find_by_id("not-an-id").await.is_none());
}

#[tokio::test]
async fn find_by_id_always_misses_in_live_mode() {
    let svc = NewsService::live(Arc::new(FailingSearch));
    assert!(svc.find_by_id("business-0").await.is_none());
}
