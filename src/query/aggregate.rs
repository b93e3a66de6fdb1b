//! Aggregator
//!
//! Reduces a filtered month list into summary statistics. Unlike the
//! year-level totals carried on [`FilterResult`], `total_units` here is
//! summed over the filtered months only.

use serde::{Deserialize, Serialize};

use crate::query::engine::FilterResult;

/// Statistics over the months that survived filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_sales: u64,
    /// `total_sales / months_displayed`, unrounded
    pub avg_sales: f64,
    pub total_units: u64,
    pub months_displayed: usize,
}

impl SummaryStats {
    /// Average sales rounded to whole rupees for display
    pub fn rounded_avg_sales(&self) -> u64 {
        self.avg_sales.round() as u64
    }
}

/// Outcome of summarizing a filter result
///
/// `Empty` is a legitimate state (no month met the threshold), not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Summary {
    Empty,
    #[serde(rename = "ok")]
    Stats(SummaryStats),
}

impl Summary {
    pub fn stats(&self) -> Option<&SummaryStats> {
        match self {
            Summary::Stats(stats) => Some(stats),
            Summary::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Summary::Empty)
    }
}

/// Summarize a filter result's month list
pub fn summarize(result: &FilterResult) -> Summary {
    let count = result.data.len();
    if count == 0 {
        return Summary::Empty;
    }

    // Stored years are checked for overflow at load; hand-built results saturate
    let total_sales = result
        .data
        .iter()
        .fold(0u64, |acc, m| acc.saturating_add(m.sales));
    let total_units = result
        .data
        .iter()
        .fold(0u64, |acc, m| acc.saturating_add(m.units));

    Summary::Stats(SummaryStats {
        total_sales,
        avg_sales: total_sales as f64 / count as f64,
        total_units,
        months_displayed: count,
    })
}
