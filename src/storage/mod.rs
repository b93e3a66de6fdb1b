//! Salesboard Dataset Store
//!
//! This module holds the sales dataset the rest of the crate queries:
//!
//! - **types**: Core records (Month, MonthlyRecord, YearlyRecord, Dataset)
//! - **seed**: Built-in 2022-2024 sales data
//! - **store**: Validated, read-only store with lookup by year
//! - **loader**: Optional JSON/CSV dataset files
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use salesboard::storage::DatasetStore;
//!
//! let store = DatasetStore::builtin();
//! let record = store.find_year(2024).unwrap();
//! assert_eq!(record.data.len(), 12);
//! assert_eq!(store.years(), vec![2022, 2023, 2024]);
//! ```

pub mod error;
pub mod loader;
pub mod seed;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use loader::{load_dataset, open_store, DatasetSource};
pub use seed::builtin_dataset;
pub use store::{validate_record, DatasetStore};
pub use types::{Dataset, Month, MonthlyRecord, YearlyRecord};
