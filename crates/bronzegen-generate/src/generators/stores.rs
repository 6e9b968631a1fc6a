use bronzegen_core::StoreRow;
use rand::Rng;

use super::pick;
use crate::catalog::{CITIES_BY_STATE, STORE_TYPES, STREET_NAMES};

/// Store number for the 1-based `store_num`, e.g. `STR-0007`.
pub fn store_nbr(store_num: u64) -> String {
    format!("STR-{store_num:04}")
}

/// Builds store rows with sequential store numbers.
#[derive(Debug)]
pub struct StoreGenerator<R> {
    rng: R,
}

impl<R: Rng> StoreGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn store(&mut self, store_num: u64) -> StoreRow {
        let (state, cities) = pick(&CITIES_BY_STATE, &mut self.rng);
        let city = pick(cities, &mut self.rng);
        StoreRow {
            store_nbr: store_nbr(store_num),
            store_name: format!("{} Books", pick(&STORE_TYPES, &mut self.rng)),
            store_address: format!(
                "{} {}",
                self.rng.random_range(100..=9999),
                pick(&STREET_NAMES, &mut self.rng)
            ),
            store_city: city.to_string(),
            store_state: state.to_string(),
            store_zip: self.rng.random_range(10000..=99999).to_string(),
        }
    }

    pub fn generate(&mut self, count: u64) -> Vec<StoreRow> {
        (1..=count).map(|store_num| self.store(store_num)).collect()
    }
}
