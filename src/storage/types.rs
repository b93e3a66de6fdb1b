//! Core data types for the sales dataset
//!
//! This module defines the records held by the dataset store:
//! - `Month`: Calendar month, ordered January to December
//! - `MonthlyRecord`: One month's sales, revenue and units
//! - `YearlyRecord`: Twelve months plus the year's stored totals
//! - `Dataset`: All yearly records, one per year

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::storage::error::{StorageError, StorageResult};

/// Calendar month
///
/// Serialized as its three-letter abbreviation ("Jan", "Feb", ...).
/// Ordering follows the calendar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All twelve months in calendar order
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Three-letter abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// 1-based calendar number
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.abbreviation().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown month: {}", s))
    }
}

/// One calendar month's performance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyRecord {
    pub month: Month,
    /// Sales in whole rupees
    pub sales: u64,
    /// Revenue in whole rupees, sourced independently of `sales`
    pub revenue: u64,
    /// Units sold
    pub units: u64,
}

impl MonthlyRecord {
    pub fn new(month: Month, sales: u64, revenue: u64, units: u64) -> Self {
        Self {
            month,
            sales,
            revenue,
            units,
        }
    }

    /// Check whether this month meets a minimum-sales threshold (inclusive)
    pub fn meets_threshold(&self, threshold: f64) -> bool {
        self.sales as f64 >= threshold
    }
}

fn checked_sum(mut values: impl Iterator<Item = u64>) -> Option<u64> {
    values.try_fold(0u64, u64::checked_add)
}

/// One year's full dataset
///
/// `total_revenue` and `total_units` are stored, not recomputed. They must
/// equal the sums over `data`; the store checks this when it is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRecord {
    pub year: i32,
    pub data: Vec<MonthlyRecord>,
    pub total_revenue: u64,
    pub total_units: u64,
}

impl YearlyRecord {
    /// Build a record from its months, deriving the stored totals
    pub fn from_months(year: i32, data: Vec<MonthlyRecord>) -> StorageResult<Self> {
        let mut record = Self {
            year,
            data,
            total_revenue: 0,
            total_units: 0,
        };
        record.total_revenue = record
            .computed_revenue()
            .ok_or(StorageError::Overflow { year, field: "totalRevenue" })?;
        record.total_units = record
            .computed_units()
            .ok_or(StorageError::Overflow { year, field: "totalUnits" })?;
        Ok(record)
    }

    /// Sum of `sales` over the months present, `None` if it overflows
    pub fn computed_sales(&self) -> Option<u64> {
        checked_sum(self.data.iter().map(|m| m.sales))
    }

    /// Sum of `revenue` over the months present, `None` if it overflows
    pub fn computed_revenue(&self) -> Option<u64> {
        checked_sum(self.data.iter().map(|m| m.revenue))
    }

    /// Sum of `units` over the months present, `None` if it overflows
    pub fn computed_units(&self) -> Option<u64> {
        checked_sum(self.data.iter().map(|m| m.units))
    }

    /// Look up a single month
    pub fn month(&self, month: Month) -> Option<&MonthlyRecord> {
        self.data.iter().find(|m| m.month == month)
    }
}

/// All yearly records, one per year, in load order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Dataset {
    pub records: Vec<YearlyRecord>,
}

impl Dataset {
    pub fn new(records: Vec<YearlyRecord>) -> Self {
        Self { records }
    }

    /// Known years in dataset order
    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &YearlyRecord> {
        self.records.iter()
    }
}
