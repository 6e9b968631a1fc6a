//! Core contracts for bronzegen.
//!
//! This crate defines the bronze-layer record types, the data-quality rules
//! the silver layer applies to them, and the deterministic book pricing shared
//! by every order channel.

pub mod error;
pub mod pricing;
pub mod quality;
pub mod records;
pub mod time;

pub use error::{Error, Result};
pub use pricing::{Price, book_price};
pub use quality::{DqRule, ISBN13_PATTERN, book_violations, is_isbn13, is_valid_book};
pub use records::{
    BookRow, Customer, InStoreOrderRow, OnlineOrderRow, OrderItem, Record, StoreRow,
};
pub use time::{TIMESTAMP_FORMAT, TimestampWindow, format_timestamp, parse_timestamp};
