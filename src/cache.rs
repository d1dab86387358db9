//! In-memory cache of analysis responses keyed by input hash.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;

use crate::water::AnalyzeResponse;

/// Cache statistics for monitoring
#[derive(Debug, Serialize)]
pub struct CacheStats {
    pub entries: u64,
    pub hits: u64,
    pub misses: u64,
}

/// Shared analysis cache. Cheap to clone.
#[derive(Clone)]
pub struct AppCache {
    analyses: Cache<String, Arc<AnalyzeResponse>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl AppCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            analyses: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn get_analysis(&self, input_hash: &str) -> Option<Arc<AnalyzeResponse>> {
        let found = self.analyses.get(input_hash).await;
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(input_hash, "analysis cache hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    pub async fn put_analysis(&self, response: Arc<AnalyzeResponse>) {
        self.analyses
            .insert(response.input_hash.clone(), response)
            .await;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.analyses.entry_count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
