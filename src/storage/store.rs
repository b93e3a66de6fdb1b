//! Dataset Store
//!
//! Holds the immutable sales dataset and answers point lookups by year.
//! The store validates the data model invariants once, when it is built:
//! - years are unique
//! - each year has the twelve calendar months, once each, in order
//! - stored totals equal the sums over the monthly rows
//!
//! After construction nothing is mutated, so a store can be shared freely
//! across threads without locking.

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::seed::builtin_dataset;
use crate::storage::types::{Dataset, Month, YearlyRecord};
use std::collections::HashMap;
use std::sync::OnceLock;

static GLOBAL_STORE: OnceLock<DatasetStore> = OnceLock::new();

/// Read-only store over a validated dataset
#[derive(Debug, Clone)]
pub struct DatasetStore {
    dataset: Dataset,
    /// Year -> position in `dataset.records`
    index: HashMap<i32, usize>,
}

impl DatasetStore {
    /// Build a store, validating every record
    pub fn from_dataset(dataset: Dataset) -> StorageResult<Self> {
        let mut index = HashMap::with_capacity(dataset.len());

        for (pos, record) in dataset.iter().enumerate() {
            if index.insert(record.year, pos).is_some() {
                return Err(StorageError::DuplicateYear(record.year));
            }
            validate_record(record)?;
        }

        Ok(Self { dataset, index })
    }

    /// Store over the built-in three-year dataset
    pub fn builtin() -> Self {
        let dataset = builtin_dataset();
        let index = dataset
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.year, pos))
            .collect();
        Self { dataset, index }
    }

    /// Process-wide store over the built-in dataset, created on first use
    pub fn global() -> &'static DatasetStore {
        GLOBAL_STORE.get_or_init(DatasetStore::builtin)
    }

    /// Find a year's record by exact match
    pub fn find_year(&self, year: i32) -> Option<&YearlyRecord> {
        self.index
            .get(&year)
            .and_then(|&pos| self.dataset.records.get(pos))
    }

    /// Known years in dataset order
    pub fn years(&self) -> Vec<i32> {
        self.dataset.years()
    }

    /// The full dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn year_count(&self) -> usize {
        self.dataset.len()
    }
}

/// Check month order and stored totals for one record
pub fn validate_record(record: &YearlyRecord) -> StorageResult<()> {
    for (position, expected) in Month::ALL.iter().enumerate() {
        match record.data.get(position) {
            Some(m) if m.month == *expected => {}
            Some(m) => {
                return Err(StorageError::MonthOrder {
                    year: record.year,
                    position,
                    expected: *expected,
                    found: m.month.to_string(),
                })
            }
            None => {
                return Err(StorageError::MonthOrder {
                    year: record.year,
                    position,
                    expected: *expected,
                    found: "end of data".to_string(),
                })
            }
        }
    }

    if let Some(extra) = record.data.get(Month::ALL.len()) {
        return Err(StorageError::MonthOrder {
            year: record.year,
            position: Month::ALL.len(),
            expected: Month::Dec,
            found: format!("extra month {}", extra.month),
        });
    }

    record
        .computed_sales()
        .ok_or_else(|| overflow(record, "sales"))?;

    let computed = record
        .computed_revenue()
        .ok_or_else(|| overflow(record, "totalRevenue"))?;
    if computed != record.total_revenue {
        return Err(StorageError::TotalsMismatch {
            year: record.year,
            field: "totalRevenue",
            stored: record.total_revenue,
            computed,
        });
    }

    let computed = record
        .computed_units()
        .ok_or_else(|| overflow(record, "totalUnits"))?;
    if computed != record.total_units {
        return Err(StorageError::TotalsMismatch {
            year: record.year,
            field: "totalUnits",
            stored: record.total_units,
            computed,
        });
    }

    Ok(())
}

fn overflow(record: &YearlyRecord, field: &'static str) -> StorageError {
    StorageError::Overflow {
        year: record.year,
        field,
    }
}
