use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

/// Lowest price a book can be assigned, in cents.
pub const PRICE_FLOOR_CENTS: u64 = 599;
/// Number of distinct cent values above the floor.
pub const PRICE_SPREAD_CENTS: u64 = 4400;

/// A monetary amount held as integer cents.
///
/// Serializes as a JSON number (`12.5`) and displays with two decimals
/// (`12.50`), which is how order items and totals are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }

    pub fn as_f64(self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Price of `quantity` units.
    pub fn times(self, quantity: u32) -> Self {
        Self::from_cents(self.cents.saturating_mul(u64::from(quantity)))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Price::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::default(), Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "price must be a non-negative amount, got {value}"
            )));
        }
        Ok(Price::from_cents((value * 100.0).round() as u64))
    }
}

/// Deterministic price for an ISBN, in the range 5.99..=49.98.
///
/// The SHA-256 digest of the ISBN is read as a big-endian integer and reduced
/// modulo [`PRICE_SPREAD_CENTS`], so the same book costs the same in every
/// channel and every run.
pub fn book_price(isbn: &str) -> Price {
    let digest = Sha256::digest(isbn.as_bytes());
    let remainder = digest.iter().fold(0_u64, |acc, byte| {
        (acc * 256 + u64::from(*byte)) % PRICE_SPREAD_CENTS
    });
    Price::from_cents(PRICE_FLOOR_CENTS + remainder)
}
