//! Dashboard view
//!
//! The dashboard's interactive state (year, threshold, chart type) and
//! everything derived from it in one pass: the filtered months, their
//! summary and the chart payload.

use serde::{Deserialize, Serialize};

use crate::query::aggregate::{summarize, Summary};
use crate::query::chart::{ChartData, ChartType};
use crate::query::engine::{FilterResult, QueryEngine};
use crate::query::error::QueryResult;

pub const DEFAULT_YEAR: i32 = 2024;

/// Selected filters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub year: i32,
    pub threshold: f64,
    pub chart_type: ChartType,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            threshold: 0.0,
            chart_type: ChartType::Bar,
        }
    }
}

impl DashboardState {
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type;
        self
    }

    /// Derive the full view for this state
    pub fn view(&self, engine: &QueryEngine) -> QueryResult<DashboardView> {
        let result = engine.filter_by_year_and_threshold(self.year, self.threshold)?;
        let summary = summarize(&result);
        let chart = ChartData::build(self.chart_type, &result);

        Ok(DashboardView {
            state: *self,
            result,
            summary,
            chart,
        })
    }
}

/// Everything the dashboard shows for one state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardView {
    pub state: DashboardState,
    pub result: FilterResult,
    pub summary: Summary,
    pub chart: ChartData,
}
