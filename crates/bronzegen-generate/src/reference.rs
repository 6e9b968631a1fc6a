//! Loaders for the generated files that order generators reference.

use std::io::Read;
use std::path::Path;

use bronzegen_core::is_valid_book;
use csv::StringRecord;
use tracing::debug;

use crate::errors::GenerationError;

/// A book that passes the silver-layer checks, as order items reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBook {
    pub isbn: String,
    pub title: String,
}

/// Read a books CSV and keep only rows that pass every DQ rule.
///
/// ISBN and title are stored trimmed. Fails when no row survives.
pub fn load_valid_books(path: &Path) -> Result<Vec<ValidBook>, GenerationError> {
    let reader = open_csv(path)?;
    let books = read_valid_books(reader, path)?;
    if books.is_empty() {
        return Err(GenerationError::NoValidBooks(path.to_path_buf()));
    }
    Ok(books)
}

/// Read the `store_nbr` column of a stores CSV. Fails when it is empty.
pub fn load_store_numbers(path: &Path) -> Result<Vec<String>, GenerationError> {
    let reader = open_csv(path)?;
    let stores = read_store_numbers(reader, path)?;
    if stores.is_empty() {
        return Err(GenerationError::NoStores(path.to_path_buf()));
    }
    Ok(stores)
}

fn open_csv(path: &Path) -> Result<csv::Reader<std::fs::File>, GenerationError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| reference_error(path, source))
}

fn read_valid_books<R: Read>(
    mut reader: csv::Reader<R>,
    path: &Path,
) -> Result<Vec<ValidBook>, GenerationError> {
    let headers = reader
        .headers()
        .map_err(|source| reference_error(path, source))?
        .clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let isbn_idx = column_index(&headers, "isbn", path)?;
    let title_idx = column_index(&headers, "title", path)?;

    let mut books = Vec::new();
    let mut skipped = 0_u64;
    for record in reader.records() {
        let record = record.map_err(|source| reference_error(path, source))?;
        let isbn = record.get(isbn_idx).unwrap_or("").trim();
        let title = record.get(title_idx).unwrap_or("").trim();
        if is_valid_book(isbn, title) {
            books.push(ValidBook {
                isbn: isbn.to_string(),
                title: title.to_string(),
            });
        } else {
            skipped += 1;
        }
    }

    debug!(
        path = %path.display(),
        kept = books.len(),
        skipped,
        "books reference loaded"
    );
    Ok(books)
}

fn read_store_numbers<R: Read>(
    mut reader: csv::Reader<R>,
    path: &Path,
) -> Result<Vec<String>, GenerationError> {
    let headers = reader
        .headers()
        .map_err(|source| reference_error(path, source))?
        .clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let store_idx = column_index(&headers, "store_nbr", path)?;

    let mut stores = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| reference_error(path, source))?;
        let store_nbr = record.get(store_idx).unwrap_or("").trim();
        if !store_nbr.is_empty() {
            stores.push(store_nbr.to_string());
        }
    }

    debug!(path = %path.display(), stores = stores.len(), "stores reference loaded");
    Ok(stores)
}

fn column_index(
    headers: &StringRecord,
    column: &str,
    path: &Path,
) -> Result<usize, GenerationError> {
    headers
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| GenerationError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

fn reference_error(path: &Path, source: csv::Error) -> GenerationError {
    GenerationError::Reference {
        path: path.to_path_buf(),
        source,
    }
}
