//! Chart-ready series
//!
//! Shapes a [`FilterResult`] into the payload a chart renderer consumes.
//! The chart kind is a closed set; every kind plots monthly sales against
//! month labels, and pie charts also carry each month's share of the total.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::query::engine::FilterResult;
use crate::query::error::QueryError;

/// Message shown when no month survives the filters
pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";

const SERIES_COLOR: &str = "#3b82f6";

const PIE_COLORS: [&str; 12] = [
    "#3b82f6", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981", "#06b6d4", "#6366f1", "#f97316",
    "#14b8a6", "#a855f7", "#84cc16", "#ef4444",
];

/// Chart presentation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartType {
    pub fn all() -> &'static [ChartType] {
        &[ChartType::Bar, ChartType::Line, ChartType::Pie]
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartType::Bar => write!(f, "bar"),
            ChartType::Line => write!(f, "line"),
            ChartType::Pie => write!(f, "pie"),
        }
    }
}

impl FromStr for ChartType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "pie" => Ok(ChartType::Pie),
            _ => Err(QueryError::InvalidChartType(s.to_string())),
        }
    }
}

/// Series payload for one chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub chart_type: ChartType,
    pub title: String,
    /// Month abbreviations, in filtered order
    pub labels: Vec<String>,
    /// Monthly sales, aligned with `labels`
    pub values: Vec<u64>,
    /// Percentage of filtered sales per month (pie only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<Vec<f64>>,
    /// One colour per point for pie charts, a single series colour otherwise
    pub colors: Vec<String>,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChartData {
    /// Build the payload for a chart type
    pub fn build(chart_type: ChartType, result: &FilterResult) -> Self {
        let labels: Vec<String> = result.data.iter().map(|m| m.month.to_string()).collect();
        let values: Vec<u64> = result.data.iter().map(|m| m.sales).collect();
        let empty = values.is_empty();

        let (shares, colors) = match chart_type {
            ChartType::Bar | ChartType::Line => (None, vec![SERIES_COLOR.to_string()]),
            ChartType::Pie => {
                let colors = (0..values.len())
                    .map(|i| PIE_COLORS[i % PIE_COLORS.len()].to_string())
                    .collect();
                (Some(pie_shares(&values)), colors)
            }
        };

        Self {
            chart_type,
            title: format!("{} Sales Performance", result.year),
            labels,
            values,
            shares,
            colors,
            empty,
            message: empty.then(|| NO_DATA_MESSAGE.to_string()),
        }
    }
}

fn pie_shares(values: &[u64]) -> Vec<f64> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|&v| v as f64 * 100.0 / total as f64)
        .collect()
}
