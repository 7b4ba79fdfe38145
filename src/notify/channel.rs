// src/notify/channel.rs
//! Channel-share stub. Simulates the round-trip latency of a real messaging
//! integration and returns a confirmation receipt; this is where an actual
//! webhook post would attach. No retries, no delivery guarantee.

use std::time::Duration;

use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;

use super::ShareReceipt;
use crate::news::types::NewsItem;
use crate::trends::{KeywordTrend, TechTerm};

pub const DEFAULT_SHARE_LATENCY: Duration = Duration::from_millis(800);

fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("share_total", "Payloads shared to a channel.");
    });
}

#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    latency: Duration,
}

impl Default for ChannelNotifier {
    fn default() -> Self {
        Self {
            latency: DEFAULT_SHARE_LATENCY,
        }
    }
}

impl ChannelNotifier {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub async fn share_news(&self, item: &NewsItem, channel: &str) -> ShareReceipt {
        self.deliver(channel, "news").await;
        tracing::info!(channel, id = %item.id, "sharing article");
        ShareReceipt::success(format!(
            "Article \"{}\" shared to #{} successfully",
            item.title, channel
        ))
    }

    pub async fn share_summary(&self, _summary: &str, channel: &str) -> ShareReceipt {
        self.deliver(channel, "summary").await;
        tracing::info!(channel, "sharing weekly summary");
        ShareReceipt::success(format!("Weekly summary shared to #{channel} successfully"))
    }

    pub async fn share_keywords(&self, keywords: &[KeywordTrend], channel: &str) -> ShareReceipt {
        self.deliver(channel, "keywords").await;
        tracing::info!(channel, count = keywords.len(), "sharing trending keywords");
        ShareReceipt::success(format!(
            "{} trending keywords shared to #{} successfully",
            keywords.len(),
            channel
        ))
    }

    pub async fn share_terms(&self, terms: &[TechTerm], channel: &str) -> ShareReceipt {
        self.deliver(channel, "terms").await;
        tracing::info!(channel, count = terms.len(), "sharing tech terms");
        ShareReceipt::success(format!(
            "{} tech terms shared to #{} successfully",
            terms.len(),
            channel
        ))
    }

    async fn deliver(&self, _channel: &str, kind: &'static str) {
        ensure_metrics_described();
        counter!("share_total", "kind" => kind).increment(1);
        tokio::time::sleep(self.latency).await;
    }
}
