use bronzegen_core::{
    Customer, InStoreOrderRow, OnlineOrderRow, OrderItem, Price, TimestampWindow, book_price,
    format_timestamp,
};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::pick;
use crate::catalog::{CASHIER_NAMES, INSTORE_PAYMENT_METHODS, ONLINE_PAYMENT_METHODS};
use crate::customers::CUSTOMERS;
use crate::errors::GenerationError;
use crate::reference::ValidBook;

/// Most distinct books a single order can contain.
pub const MAX_ITEMS_PER_ORDER: usize = 5;
/// Most copies of one book a single order line can hold.
pub const MAX_QUANTITY: u32 = 3;
/// Share of in-store orders that record a customer email.
pub const INSTORE_EMAIL_RATE: f64 = 0.3;

/// Draw 1..=5 distinct books (fewer if the pool is smaller) with quantities
/// and deterministic prices. Returns the items and their exact total.
pub fn assemble_items<R: Rng + ?Sized>(books: &[ValidBook], rng: &mut R) -> (Vec<OrderItem>, Price) {
    let wanted = rng.random_range(1..=MAX_ITEMS_PER_ORDER).min(books.len());
    let picked: Vec<&ValidBook> = books.choose_multiple(rng, wanted).collect();
    let items: Vec<OrderItem> = picked
        .into_iter()
        .map(|book| OrderItem {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            quantity: rng.random_range(1..=MAX_QUANTITY),
            unit_price: book_price(&book.isbn),
        })
        .collect();
    let total = items.iter().map(OrderItem::line_total).sum();
    (items, total)
}

fn random_timestamp<R: Rng + ?Sized>(window: &TimestampWindow, rng: &mut R) -> String {
    format_timestamp(&window.at_fraction(rng.random::<f64>()))
}

fn require_books(books: &[ValidBook]) -> Result<(), GenerationError> {
    if books.is_empty() {
        return Err(GenerationError::InvalidOptions(
            "order generation needs at least one valid book".to_string(),
        ));
    }
    Ok(())
}

/// Builds point-of-sale orders against known books and stores.
#[derive(Debug)]
pub struct InStoreOrderGenerator<'a, R> {
    rng: R,
    books: &'a [ValidBook],
    stores: &'a [String],
    window: TimestampWindow,
}

impl<'a, R: Rng> InStoreOrderGenerator<'a, R> {
    pub fn new(
        rng: R,
        books: &'a [ValidBook],
        stores: &'a [String],
        window: TimestampWindow,
    ) -> Result<Self, GenerationError> {
        require_books(books)?;
        if stores.is_empty() {
            return Err(GenerationError::InvalidOptions(
                "in-store orders need at least one store".to_string(),
            ));
        }
        Ok(Self {
            rng,
            books,
            stores,
            window,
        })
    }

    pub fn order(&mut self, order_num: u64) -> Result<InStoreOrderRow, GenerationError> {
        let (items, total) = assemble_items(self.books, &mut self.rng);
        let customer_email = if self.rng.random_bool(INSTORE_EMAIL_RATE) {
            pick(&CUSTOMERS, &mut self.rng).email.to_string()
        } else {
            String::new()
        };

        Ok(InStoreOrderRow {
            order_id: format!("INS-{order_num:06}"),
            transaction_timestamp: random_timestamp(&self.window, &mut self.rng),
            store_nbr: pick(self.stores, &mut self.rng).clone(),
            customer_email,
            items: serde_json::to_string(&items)?,
            payment_method: pick(&INSTORE_PAYMENT_METHODS, &mut self.rng).to_string(),
            total_amount: total.to_string(),
            cashier_name: pick(&CASHIER_NAMES, &mut self.rng).to_string(),
        })
    }

    pub fn generate(&mut self, count: u64) -> Result<Vec<InStoreOrderRow>, GenerationError> {
        (1..=count).map(|order_num| self.order(order_num)).collect()
    }
}

/// Builds web orders for a fixed subset of the customer directory.
#[derive(Debug)]
pub struct OnlineOrderGenerator<'a, R> {
    rng: R,
    books: &'a [ValidBook],
    customers: Vec<Customer>,
    window: TimestampWindow,
}

impl<'a, R: Rng> OnlineOrderGenerator<'a, R> {
    /// Samples roughly one customer per three orders (at least one) up front,
    /// so several orders share an identity.
    pub fn new(
        mut rng: R,
        books: &'a [ValidBook],
        order_count: u64,
        window: TimestampWindow,
    ) -> Result<Self, GenerationError> {
        require_books(books)?;
        let wanted = usize::try_from((order_count / 3).max(1))
            .unwrap_or(usize::MAX)
            .min(CUSTOMERS.len());
        let customers = CUSTOMERS.choose_multiple(&mut rng, wanted).copied().collect();
        Ok(Self {
            rng,
            books,
            customers,
            window,
        })
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn order(&mut self, order_num: u64) -> Result<OnlineOrderRow, GenerationError> {
        let customer = *pick(&self.customers, &mut self.rng);
        let (items, total) = assemble_items(self.books, &mut self.rng);

        Ok(OnlineOrderRow {
            order_id: format!("ONL-{order_num:06}"),
            order_timestamp: random_timestamp(&self.window, &mut self.rng),
            customer_email: customer.email.to_string(),
            customer_name: customer.name.to_string(),
            customer_address: customer.address.to_string(),
            customer_city: customer.city.to_string(),
            customer_state: customer.state.to_string(),
            customer_zip: customer.zip.to_string(),
            items: serde_json::to_string(&items)?,
            payment_method: pick(&ONLINE_PAYMENT_METHODS, &mut self.rng).to_string(),
            total_amount: total.to_string(),
        })
    }

    pub fn generate(&mut self, count: u64) -> Result<Vec<OnlineOrderRow>, GenerationError> {
        (1..=count).map(|order_num| self.order(order_num)).collect()
    }
}
