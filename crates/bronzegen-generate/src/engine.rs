use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use crate::errors::GenerationError;
use crate::generators::{
    BookGenerator, InStoreOrderGenerator, OnlineOrderGenerator, StoreGenerator, seeded_rng,
};
use crate::model::{
    BooksOptions, Dataset, DatasetDetails, GenerateOptions, GenerationReport,
    InStoreOrdersOptions, OnlineOrdersOptions, StoresOptions,
};
use crate::output::csv::write_rows_csv;
use crate::output::report::write_report;
use crate::reference::{load_store_numbers, load_valid_books};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub output: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating one bronze dataset and writing it as CSV.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

struct Written {
    rows: u64,
    bytes: u64,
    details: DatasetDetails,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, dataset: &Dataset) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let output = self
            .options
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(dataset.default_file_name()));
        let seed = dataset.seed();

        info!(
            run_id = %run_id,
            dataset = dataset.name(),
            seed,
            output = %output.display(),
            "generation started"
        );

        let outcome = match dataset {
            Dataset::Books(options) => run_books(options, seed, &output),
            Dataset::Stores(options) => run_stores(options, seed, &output),
            Dataset::InStoreOrders(options) => run_instore_orders(options, seed, &output),
            Dataset::OnlineOrders(options) => run_online_orders(options, seed, &output),
        };
        let written = match outcome {
            Ok(written) => written,
            Err(err) => {
                warn!(run_id = %run_id, dataset = dataset.name(), error = %err, "generation failed");
                return Err(err);
            }
        };

        let report = GenerationReport {
            run_id: run_id.clone(),
            dataset: dataset.name().to_string(),
            output: output.display().to_string(),
            seed,
            rows_written: written.rows,
            bytes_written: written.bytes,
            duration_ms: start.elapsed().as_millis() as u64,
            details: written.details,
        };

        if let Some(report_path) = &self.options.report {
            write_report(report_path, &report)?;
            info!(run_id = %run_id, path = %report_path.display(), "report written");
        }

        info!(
            run_id = %run_id,
            dataset = dataset.name(),
            rows = report.rows_written,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "dataset written"
        );

        Ok(GenerationResult { output, report })
    }
}

fn run_books(options: &BooksOptions, seed: u64, output: &Path) -> Result<Written, GenerationError> {
    let batch = BookGenerator::new(seeded_rng(seed)).generate(options.valid, options.invalid)?;
    let bytes = write_rows_csv(output, &batch.rows)?;

    Ok(Written {
        rows: batch.rows.len() as u64,
        bytes,
        details: DatasetDetails::Books {
            valid_rows: batch.valid,
            invalid_rows: batch.invalid,
            defects_by_mode: batch.defects_by_mode,
        },
    })
}

fn run_stores(options: &StoresOptions, seed: u64, output: &Path) -> Result<Written, GenerationError> {
    let stores = StoreGenerator::new(seeded_rng(seed)).generate(options.count);
    let bytes = write_rows_csv(output, &stores)?;

    Ok(Written {
        rows: stores.len() as u64,
        bytes,
        details: DatasetDetails::Stores,
    })
}

fn run_instore_orders(
    options: &InStoreOrdersOptions,
    seed: u64,
    output: &Path,
) -> Result<Written, GenerationError> {
    let books = load_valid_books(&options.books)?;
    let stores = load_store_numbers(&options.stores)?;
    info!(
        valid_books = books.len(),
        stores = stores.len(),
        "references loaded"
    );

    let mut generator = InStoreOrderGenerator::new(seeded_rng(seed), &books, &stores, options.window)?;
    let orders = generator.generate(options.count)?;
    let bytes = write_rows_csv(output, &orders)?;
    let emails_attached = orders
        .iter()
        .filter(|order| !order.customer_email.is_empty())
        .count() as u64;

    Ok(Written {
        rows: orders.len() as u64,
        bytes,
        details: DatasetDetails::InstoreOrders {
            valid_books_loaded: books.len() as u64,
            stores_loaded: stores.len() as u64,
            emails_attached,
        },
    })
}

fn run_online_orders(
    options: &OnlineOrdersOptions,
    seed: u64,
    output: &Path,
) -> Result<Written, GenerationError> {
    let books = load_valid_books(&options.books)?;
    info!(valid_books = books.len(), "references loaded");

    let mut generator =
        OnlineOrderGenerator::new(seeded_rng(seed), &books, options.count, options.window)?;
    let distinct_customers = generator.customers().len() as u64;
    let orders = generator.generate(options.count)?;
    let bytes = write_rows_csv(output, &orders)?;

    Ok(Written {
        rows: orders.len() as u64,
        bytes,
        details: DatasetDetails::OnlineOrders {
            valid_books_loaded: books.len() as u64,
            distinct_customers,
        },
    })
}
