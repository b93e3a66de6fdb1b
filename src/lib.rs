//! # Salesboard
//!
//! Sales analytics service over a small, fixed dataset of yearly e-commerce
//! sales. Each year holds twelve monthly records of sales, revenue and units.
//!
//! ## Features
//!
//! - **Read-only dataset**: Built-in 2022-2024 data, or a JSON/CSV file validated at load
//! - **Threshold filtering**: Months at or above a sales threshold, in calendar order
//! - **Summary statistics**: Total and average sales over the displayed months
//! - **Chart series**: Bar, line and pie payloads ready for a charting front end
//! - **REST API**: Axum server with strict parameter validation
//!
//! ## Modules
//!
//! - [`storage`]: Dataset types, built-in data and file loading
//! - [`query`]: Filtering, aggregation, chart shaping and dashboard state
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use salesboard::query::{summarize, QueryEngine};
//! use salesboard::storage::DatasetStore;
//! use std::sync::Arc;
//!
//! let engine = QueryEngine::new(Arc::new(DatasetStore::builtin()));
//!
//! // Months of 2024 with at least 5,000,000 in sales
//! let result = engine.filter_by_year_and_threshold(2024, 5_000_000.0).unwrap();
//! assert_eq!(result.len(), 9);
//!
//! let summary = summarize(&result);
//! assert_eq!(summary.stats().map(|s| s.months_displayed), Some(9));
//! ```

pub mod api;
pub mod config;
pub mod query;
pub mod storage;

// Re-export top-level types for convenience
pub use storage::{
    Dataset, DatasetSource, DatasetStore, Month, MonthlyRecord, StorageError, StorageResult,
    YearlyRecord,
};

pub use query::{
    summarize, ChartData, ChartType, DashboardState, FilterResult, QueryEngine, QueryError,
    Summary, SummaryStats,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::Config;
