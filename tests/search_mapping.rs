// tests/search_mapping.rs
//
// Upstream article → display item mapping. Every present field carries over
// unchanged; an absent description stays absent.

use chrono::{DateTime, Utc};

use ai_news_hub::news::types::{Article, NewsItem};
use ai_news_hub::NewsCategory;

fn wire_article(json: serde_json::Value) -> Article {
    serde_json::from_value(json).expect("article json")
}

#[test]
fn mapping_preserves_fields_and_assigns_a_positional_id() {
    let article = wire_article(serde_json::json!({
        "source": { "id": "reuters", "name": "Reuters" },
        "title": "AI Chips Double in Efficiency",
        "description": "Benchmarks show a generational jump.",
        "url": "https://example.test/chips",
        "urlToImage": "https://example.test/chips.jpg",
        "publishedAt": "2026-07-30T08:15:00Z",
        "content": "Full article body."
    }));

    let item = NewsItem::from_article(article, NewsCategory::Technical, 4);
    assert_eq!(item.id, "technical-4");
    assert_eq!(item.title, "AI Chips Double in Efficiency");
    assert_eq!(item.source, "Reuters");
    assert_eq!(item.url, "https://example.test/chips");
    assert_eq!(item.image_url.as_deref(), Some("https://example.test/chips.jpg"));
    assert_eq!(
        item.description.as_deref(),
        Some("Benchmarks show a generational jump.")
    );
    assert_eq!(
        item.published_at,
        "2026-07-30T08:15:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    assert_eq!(item.category, NewsCategory::Technical);
}

#[test]
fn missing_description_is_not_synthesized() {
    let article = wire_article(serde_json::json!({
        "source": { "id": null, "name": "Wired" },
        "title": "Untitled Brief",
        "description": null,
        "url": "https://example.test/brief",
        "urlToImage": null,
        "publishedAt": "2026-08-02T00:00:00Z",
        "content": "Content that must NOT leak into the description."
    }));

    let item = NewsItem::from_article(article, NewsCategory::Business, 0);
    assert_eq!(item.description, None);
    assert_eq!(item.image_url, None);
    assert_eq!(item.title, "Untitled Brief");
    assert_eq!(item.source, "Wired");
}

#[test]
fn malformed_timestamp_degrades_to_the_epoch() {
    let article = wire_article(serde_json::json!({
        "source": { "id": null, "name": "AI Today" },
        "title": "t",
        "description": "d",
        "url": "https://example.test/t",
        "urlToImage": null,
        "publishedAt": "yesterday-ish",
        "content": null
    }));

    let item = NewsItem::from_article(article, NewsCategory::Overview, 1);
    assert_eq!(item.published_at, DateTime::<Utc>::UNIX_EPOCH);
}
