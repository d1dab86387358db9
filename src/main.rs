//! Water Insights - Rust/Axum analysis service
//!
//! Rule-based water-parameter analysis for the aquarium tracking app.
//! The app keeps tanks and test history; this service only computes.

use axum::{extract::State, response::Json, routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cache;
mod config;
mod error;
pub mod water;

use cache::{AppCache, CacheStats};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: AppCache,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "water_insights=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Analysis cache: capacity {}, ttl {:?}",
        config.cache_capacity,
        config.cache_ttl
    );

    let state = AppState {
        cache: AppCache::new(config.cache_capacity, config.cache_ttl),
    };

    let app = Router::new()
        // Health check and cache stats
        .route("/health", get(health_check))
        .route("/health/cache", get(cache_stats))
        // Water test analysis API (called by the app)
        .nest("/api/water", water::router())
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "water-insights",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Cache statistics endpoint
async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}
