//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{FilterResult, Summary};
use crate::storage::{Dataset, YearlyRecord};

// ============================================
// SALES DTOs
// ============================================

/// Query parameters for `GET /api/sales`
///
/// Both values arrive as text and are parsed by the handler, so a malformed
/// value becomes an `INVALID_PARAMETER` response rather than an extractor
/// rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalesParams {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub threshold: Option<String>,
}

impl SalesParams {
    pub fn new(year: Option<&str>, threshold: Option<&str>) -> Self {
        Self {
            year: year.map(str::to_string),
            threshold: threshold.map(str::to_string),
        }
    }
}

/// Query parameters for the chart and dashboard endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartParams {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub threshold: Option<String>,
    /// bar, line or pie
    #[serde(default, rename = "type")]
    pub chart_type: Option<String>,
}

/// Full dataset with its known years
#[derive(Debug, Serialize)]
pub struct DatasetResponse<'a> {
    pub years: Vec<i32>,
    pub data: &'a Dataset,
}

/// Response of `GET /api/sales`, shaped by which parameters were given
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SalesResponse<'a> {
    /// Neither year nor threshold (or threshold alone)
    All(DatasetResponse<'a>),
    /// Year alone: the full, unfiltered record
    Year(&'a YearlyRecord),
    /// Year and threshold
    Filtered(FilterResult),
}

/// Known years
#[derive(Debug, Serialize, Deserialize)]
pub struct YearsResponse {
    pub years: Vec<i32>,
}

/// Summary for one (year, threshold)
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub year: i32,
    pub threshold: i64,
    pub summary: Summary,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Years served
    pub years: Vec<i32>,
    /// Dataset source: built-in or a file path
    pub dataset: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// When the server started
    pub started_at: DateTime<Utc>,
    /// Application version
    pub version: String,
}
