//! Bronze-layer test data generation for bronzegen.
//!
//! Builds books, stores and order datasets from static catalogs and a seeded
//! RNG, cross-checks orders against previously generated files, and writes
//! each dataset as a single CSV.

pub mod catalog;
pub mod customers;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod reference;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{
    BooksOptions, DEFAULT_ORDER_SEED, Dataset, DatasetDetails, GenerateOptions, GenerationReport,
    InStoreOrdersOptions, OnlineOrdersOptions, StoresOptions,
};
pub use reference::{ValidBook, load_store_numbers, load_valid_books};
