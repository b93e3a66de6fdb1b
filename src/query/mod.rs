//! Salesboard Query Layer
//!
//! Filtering and aggregation over the sales dataset:
//!
//! - **Engine**: Select a year and apply a minimum-sales threshold
//! - **Aggregate**: Summary statistics over the filtered months
//! - **Chart**: Bar, line and pie series payloads
//! - **Dashboard**: Combined view for one set of selected filters
//!
//! # Example
//!
//! ```rust
//! use salesboard::query::{summarize, QueryEngine};
//! use salesboard::storage::DatasetStore;
//! use std::sync::Arc;
//!
//! let engine = QueryEngine::new(Arc::new(DatasetStore::builtin()));
//!
//! let result = engine.filter_by_year_and_threshold(2024, 5_000_000.0).unwrap();
//! assert_eq!(result.data.len(), 9);
//!
//! let summary = summarize(&result);
//! assert_eq!(summary.stats().unwrap().months_displayed, 9);
//! ```

mod aggregate;
mod chart;
mod dashboard;
mod engine;
mod error;

pub use aggregate::{summarize, Summary, SummaryStats};
pub use chart::{ChartData, ChartType, NO_DATA_MESSAGE};
pub use dashboard::{DashboardState, DashboardView, DEFAULT_YEAR};
pub use engine::{FilterResult, QueryEngine};
pub use error::{QueryError, QueryResult};
