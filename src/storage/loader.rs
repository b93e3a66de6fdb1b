//! Dataset Loader
//!
//! Reads a sales dataset from a file instead of the built-in data.
//! Supported formats, chosen by extension:
//!
//! - `.json`: array of yearly records (`year`, `data`, `totalRevenue`, `totalUnits`)
//! - `.csv`: one row per month with header `year,month,sales,revenue,units`
//!
//! CSV rows are grouped by year in first-seen order and the yearly totals
//! are computed from the rows. Either way the result goes through
//! [`DatasetStore::from_dataset`], so invalid data is rejected at load time.

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::store::DatasetStore;
use crate::storage::types::{Dataset, Month, MonthlyRecord, YearlyRecord};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Source of the dataset, reported at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Builtin,
    File(String),
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::Builtin => write!(f, "built-in"),
            DatasetSource::File(path) => write!(f, "{}", path),
        }
    }
}

/// One CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    year: i32,
    month: String,
    sales: u64,
    revenue: u64,
    units: u64,
}

/// Open a store from an optional dataset file, falling back to built-in data
pub fn open_store(path: Option<&Path>) -> StorageResult<(DatasetStore, DatasetSource)> {
    match path {
        Some(path) => {
            let dataset = load_dataset(path)?;
            let store = DatasetStore::from_dataset(dataset)?;
            Ok((store, DatasetSource::File(path.display().to_string())))
        }
        None => Ok((DatasetStore::builtin(), DatasetSource::Builtin)),
    }
}

/// Load a dataset file, dispatching on its extension
pub fn load_dataset(path: &Path) -> StorageResult<Dataset> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => {
            let content = std::fs::read_to_string(path)?;
            parse_json(&content)
        }
        Some("csv") => {
            let file = std::fs::File::open(path)?;
            parse_csv(file)
        }
        _ => Err(StorageError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Parse a JSON dataset
pub fn parse_json(content: &str) -> StorageResult<Dataset> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a CSV dataset
pub fn parse_csv<R: Read>(reader: R) -> StorageResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut years: Vec<(i32, Vec<MonthlyRecord>)> = Vec::new();

    for (line_num, result) in reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1
        let row_number = line_num + 2;

        let row = result.map_err(|e| StorageError::Csv {
            row: row_number,
            message: e.to_string(),
        })?;

        let month: Month = row.month.parse().map_err(|message| StorageError::Csv {
            row: row_number,
            message,
        })?;

        let record = MonthlyRecord::new(month, row.sales, row.revenue, row.units);

        match years.iter_mut().find(|(year, _)| *year == row.year) {
            Some((_, months)) => months.push(record),
            None => years.push((row.year, vec![record])),
        }
    }

    let records = years
        .into_iter()
        .map(|(year, months)| YearlyRecord::from_months(year, months))
        .collect::<StorageResult<Vec<_>>>()?;

    Ok(Dataset::new(records))
}
