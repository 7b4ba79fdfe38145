//! AI News Hub — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ai_news_hub::api::{self, AppState};
use ai_news_hub::config::AppConfig;
use ai_news_hub::metrics::Metrics;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ai_news_hub=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = AppConfig::load()?;
    tracing::info!(
        live_search = cfg.live_search_enabled(),
        "starting ai-news-hub"
    );

    let metrics = Metrics::init();
    let state = AppState::from_config(&cfg);
    let router = api::router(state).merge(metrics.router());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
