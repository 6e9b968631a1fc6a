use serde::{Deserialize, Serialize};

use crate::pricing::Price;
use crate::quality::{DqRule, book_violations};

/// A bronze CSV record with a fixed column order.
///
/// `COLUMNS` must list the struct's fields in declaration order, since rows are
/// serialized positionally under this header.
pub trait Record: Serialize {
    const COLUMNS: &'static [&'static str];
}

/// A row of the bronze books file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRow {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl Record for BookRow {
    const COLUMNS: &'static [&'static str] = &["isbn", "title", "author", "genre"];
}

impl BookRow {
    pub fn violations(&self) -> Vec<DqRule> {
        book_violations(&self.isbn, &self.title)
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

/// A row of the bronze stores file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRow {
    pub store_nbr: String,
    pub store_name: String,
    pub store_address: String,
    pub store_city: String,
    pub store_state: String,
    pub store_zip: String,
}

impl Record for StoreRow {
    const COLUMNS: &'static [&'static str] = &[
        "store_nbr",
        "store_name",
        "store_address",
        "store_city",
        "store_state",
        "store_zip",
    ];
}

/// A line item embedded as JSON in an order's `items` cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub isbn: String,
    pub title: String,
    pub quantity: u32,
    pub unit_price: Price,
}

impl OrderItem {
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// A row of the bronze in-store orders file.
///
/// `items` holds the JSON-encoded item list and `total_amount` the two-decimal
/// sum of the item line totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InStoreOrderRow {
    pub order_id: String,
    pub transaction_timestamp: String,
    pub store_nbr: String,
    pub customer_email: String,
    pub items: String,
    pub payment_method: String,
    pub total_amount: String,
    pub cashier_name: String,
}

impl Record for InStoreOrderRow {
    const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "transaction_timestamp",
        "store_nbr",
        "customer_email",
        "items",
        "payment_method",
        "total_amount",
        "cashier_name",
    ];
}

/// A row of the bronze online orders file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineOrderRow {
    pub order_id: String,
    pub order_timestamp: String,
    pub customer_email: String,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_city: String,
    pub customer_state: String,
    pub customer_zip: String,
    pub items: String,
    pub payment_method: String,
    pub total_amount: String,
}

impl Record for OnlineOrderRow {
    const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "order_timestamp",
        "customer_email",
        "customer_name",
        "customer_address",
        "customer_city",
        "customer_state",
        "customer_zip",
        "items",
        "payment_method",
        "total_amount",
    ];
}

/// A customer identity shared by both order channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customer {
    pub email: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip: &'static str,
}
