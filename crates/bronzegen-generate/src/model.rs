use std::collections::BTreeMap;
use std::path::PathBuf;

use bronzegen_core::TimestampWindow;
use serde::{Deserialize, Serialize};

use crate::generators::DefectMode;

/// Seed the order generators use when none is given.
pub const DEFAULT_ORDER_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooksOptions {
    pub valid: u64,
    pub invalid: u64,
    pub seed: Option<u64>,
}

impl BooksOptions {
    /// Explicit seed, or one derived from the requested counts.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            self.valid
                .wrapping_mul(100_003)
                .wrapping_add(self.invalid)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoresOptions {
    pub count: u64,
    pub seed: Option<u64>,
}

impl StoresOptions {
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InStoreOrdersOptions {
    pub count: u64,
    pub books: PathBuf,
    pub stores: PathBuf,
    pub seed: Option<u64>,
    pub window: TimestampWindow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnlineOrdersOptions {
    pub count: u64,
    pub books: PathBuf,
    pub seed: Option<u64>,
    pub window: TimestampWindow,
}

/// One generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dataset {
    Books(BooksOptions),
    Stores(StoresOptions),
    InStoreOrders(InStoreOrdersOptions),
    OnlineOrders(OnlineOrdersOptions),
}

impl Dataset {
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Books(_) => "books",
            Dataset::Stores(_) => "stores",
            Dataset::InStoreOrders(_) => "instore_orders",
            Dataset::OnlineOrders(_) => "online_orders",
        }
    }

    /// File name used when no output path is given.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Dataset::Books(_) => "bronze_books.csv",
            Dataset::Stores(_) => "bronze_stores.csv",
            Dataset::InStoreOrders(_) => "bronze_instore_orders.csv",
            Dataset::OnlineOrders(_) => "bronze_online_orders.csv",
        }
    }

    pub fn seed(&self) -> u64 {
        match self {
            Dataset::Books(options) => options.seed(),
            Dataset::Stores(options) => options.seed(),
            Dataset::InStoreOrders(options) => options.seed.unwrap_or(DEFAULT_ORDER_SEED),
            Dataset::OnlineOrders(options) => options.seed.unwrap_or(DEFAULT_ORDER_SEED),
        }
    }
}

/// Where a run writes its artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// CSV destination; `None` means the dataset's default file name.
    pub output: Option<PathBuf>,
    /// Optional JSON report destination.
    pub report: Option<PathBuf>,
}

/// Dataset-specific counters recorded in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DatasetDetails {
    Books {
        valid_rows: u64,
        invalid_rows: u64,
        defects_by_mode: BTreeMap<DefectMode, u64>,
    },
    Stores,
    InstoreOrders {
        valid_books_loaded: u64,
        stores_loaded: u64,
        emails_attached: u64,
    },
    OnlineOrders {
        valid_books_loaded: u64,
        distinct_customers: u64,
    },
}

/// Report for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub dataset: String,
    pub output: String,
    pub seed: u64,
    pub rows_written: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
    pub details: DatasetDetails,
}

impl GenerationReport {
    /// One-line human summary printed after a run.
    pub fn summary(&self) -> String {
        match &self.details {
            DatasetDetails::Books {
                valid_rows,
                invalid_rows,
                ..
            } => format!(
                "Wrote {} rows ({} valid, {} invalid) to {}",
                self.rows_written, valid_rows, invalid_rows, self.output
            ),
            DatasetDetails::Stores => {
                format!("Wrote {} rows to {}", self.rows_written, self.output)
            }
            DatasetDetails::InstoreOrders {
                valid_books_loaded,
                stores_loaded,
                ..
            } => format!(
                "Wrote {} orders ({} stores, {} valid books) to {}",
                self.rows_written, stores_loaded, valid_books_loaded, self.output
            ),
            DatasetDetails::OnlineOrders {
                valid_books_loaded,
                distinct_customers,
            } => format!(
                "Wrote {} orders ({} distinct customers, {} valid books) to {}",
                self.rows_written, distinct_customers, valid_books_loaded, self.output
            ),
        }
    }
}
