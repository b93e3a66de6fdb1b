//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

pub use crate::config::ApiConfig;
use crate::query::QueryEngine;
use crate::storage::{DatasetSource, DatasetStore};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only sales dataset
    pub store: Arc<DatasetStore>,
    /// Query engine over `store`
    pub engine: Arc<QueryEngine>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Where the dataset was loaded from
    pub source: DatasetSource,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new AppState over a dataset store
    pub fn new(store: Arc<DatasetStore>, source: DatasetSource, config: ApiConfig) -> Self {
        let engine = Arc::new(QueryEngine::new(Arc::clone(&store)));
        Self {
            store,
            engine,
            config: Arc::new(config),
            source,
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// AppState over the built-in dataset with default config
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(DatasetStore::builtin()),
            DatasetSource::Builtin,
            ApiConfig::default(),
        )
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
