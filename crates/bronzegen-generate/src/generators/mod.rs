//! Row generators for each bronze dataset.

pub mod books;
pub mod orders;
pub mod stores;

pub use books::{BookBatch, BookGenerator, DefectCycle, DefectMode, random_isbn};
pub use orders::{InStoreOrderGenerator, OnlineOrderGenerator, assemble_items};
pub use stores::{StoreGenerator, store_nbr};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for a generator run.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `count` random decimal digits.
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10_u8)))
        .collect()
}

/// Uniform pick from a non-empty static table.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(values: &'a [T], rng: &mut R) -> &'a T {
    &values[rng.random_range(0..values.len())]
}
