//! Query Engine
//!
//! Produces a [`FilterResult`] for a (year, threshold) pair:
//! 1. Resolve the year through the dataset store
//! 2. Keep months whose `sales >= threshold`
//! 3. Preserve calendar order
//! 4. Copy `year`, `totalRevenue` and `totalUnits` from the source record
//!
//! The year-level totals always describe the full year. Only the month list
//! is filtered. An empty month list is a valid result; only an unknown year
//! is an error.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::query::aggregate::{summarize, Summary};
use crate::query::error::{QueryError, QueryResult};
use crate::storage::{DatasetStore, MonthlyRecord, YearlyRecord};

/// A yearly record whose month list has been reduced by a threshold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    pub year: i32,
    pub data: Vec<MonthlyRecord>,
    /// Full-year revenue, not recomputed from `data`
    pub total_revenue: u64,
    /// Full-year units, not recomputed from `data`
    pub total_units: u64,
}

impl FilterResult {
    /// Apply a threshold to a yearly record
    pub fn from_record(record: &YearlyRecord, threshold: f64) -> Self {
        Self {
            year: record.year,
            data: record
                .data
                .iter()
                .filter(|m| m.meets_threshold(threshold))
                .copied()
                .collect(),
            total_revenue: record.total_revenue,
            total_units: record.total_units,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Query engine over a shared dataset store
#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: Arc<DatasetStore>,
}

impl QueryEngine {
    /// Create a new query engine
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Look up a year's full, unfiltered record
    pub fn find_year(&self, year: i32) -> QueryResult<&YearlyRecord> {
        self.store
            .find_year(year)
            .ok_or(QueryError::YearNotFound(year))
    }

    /// Filter a year's months by a minimum-sales threshold (inclusive)
    pub fn filter_by_year_and_threshold(
        &self,
        year: i32,
        threshold: f64,
    ) -> QueryResult<FilterResult> {
        let record = self.find_year(year)?;
        let result = FilterResult::from_record(record, threshold);

        tracing::debug!(
            year,
            threshold,
            months = result.len(),
            "Filtered sales by threshold"
        );

        Ok(result)
    }

    /// Filter a year and summarize the surviving months
    pub fn summary(&self, year: i32, threshold: f64) -> QueryResult<Summary> {
        let result = self.filter_by_year_and_threshold(year, threshold)?;
        Ok(summarize(&result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Month;

    fn create_test_engine() -> QueryEngine {
        QueryEngine::new(Arc::new(DatasetStore::builtin()))
    }

    fn months(result: &FilterResult) -> Vec<Month> {
        result.data.iter().map(|m| m.month).collect()
    }

    #[test]
    fn test_threshold_selects_expected_months() {
        let engine = create_test_engine();

        let result = engine.filter_by_year_and_threshold(2024, 5_000_000.0).unwrap();

        assert_eq!(
            months(&result),
            vec![
                Month::Mar,
                Month::May,
                Month::Jun,
                Month::Jul,
                Month::Aug,
                Month::Sep,
                Month::Oct,
                Month::Nov,
                Month::Dec
            ]
        );
    }

    #[test]
    fn test_unknown_year() {
        let engine = create_test_engine();

        let result = engine.filter_by_year_and_threshold(2025, 0.0);
        assert_eq!(result, Err(QueryError::YearNotFound(2025)));
    }

    #[test]
    fn test_non_positive_threshold_keeps_all_months() {
        let engine = create_test_engine();

        for year in [2022, 2023, 2024] {
            for threshold in [0.0, -1.0, -5_000_000.0] {
                let result = engine.filter_by_year_and_threshold(year, threshold).unwrap();
                assert_eq!(months(&result), Month::ALL.to_vec());
            }
        }
    }

    #[test]
    fn test_threshold_above_every_month_is_empty_not_missing() {
        let engine = create_test_engine();

        for year in [2022, 2023, 2024] {
            let max = engine
                .find_year(year)
                .unwrap()
                .data
                .iter()
                .map(|m| m.sales)
                .max()
                .unwrap();

            let result = engine
                .filter_by_year_and_threshold(year, max as f64 + 1.0)
                .unwrap();
            assert!(result.is_empty());
            assert_eq!(result.year, year);
        }
    }

    #[test]
    fn test_totals_unchanged_by_filtering() {
        let engine = create_test_engine();

        for year in [2022, 2023, 2024] {
            let record = engine.find_year(year).unwrap().clone();
            for threshold in [0.0, 4_000_000.0, 6_000_000.0, 1e12] {
                let result = engine.filter_by_year_and_threshold(year, threshold).unwrap();
                assert_eq!(result.total_revenue, record.total_revenue);
                assert_eq!(result.total_units, record.total_units);
            }
        }
    }

    #[test]
    fn test_inclusive_boundary() {
        let engine = create_test_engine();

        // 2024 May and Sep both have exactly 5,644,000
        let result = engine.filter_by_year_and_threshold(2024, 5_644_000.0).unwrap();
        assert!(result.data.iter().any(|m| m.month == Month::May));
        assert!(result.data.iter().any(|m| m.month == Month::Sep));

        let result = engine.filter_by_year_and_threshold(2024, 5_644_000.5).unwrap();
        assert!(!result.data.iter().any(|m| m.month == Month::May));
    }

    #[test]
    fn test_fractional_threshold_is_not_rounded() {
        let engine = create_test_engine();

        // Feb 2024 = 4,150,000
        let result = engine.filter_by_year_and_threshold(2024, 4_149_999.9).unwrap();
        assert_eq!(result.len(), 12);

        let result = engine.filter_by_year_and_threshold(2024, 4_150_000.1).unwrap();
        assert_eq!(result.len(), 11);
    }

    #[test]
    fn test_calendar_order_preserved() {
        let engine = create_test_engine();

        let result = engine.filter_by_year_and_threshold(2023, 5_000_000.0).unwrap();
        let got = months(&result);
        let mut sorted = got.clone();
        sorted.sort();
        assert_eq!(got, sorted);
    }

    #[test]
    fn test_nan_threshold_matches_nothing() {
        let engine = create_test_engine();

        let result = engine.filter_by_year_and_threshold(2022, f64::NAN).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_result_wire_shape() {
        let engine = create_test_engine();

        let result = engine.filter_by_year_and_threshold(2022, 7_000_000.0).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["year"], 2022);
        assert_eq!(json["totalRevenue"], 300_045_000u64);
        assert_eq!(json["totalUnits"], 7230);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }
}
