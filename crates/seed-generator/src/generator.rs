//! Main data generator for producing entity batches.

use crate::entities::{generate_customers, generate_orders, generate_products};
use crate::error::GeneratorError;
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_core::{Customer, CustomerId, Order, Product};

/// Data generator that produces customer, product and order batches.
///
/// With a seed, the generator reproduces the same batches for the same
/// sequence of calls. Without one it draws from OS entropy, so each run
/// produces a fresh dataset.
pub struct DataGenerator {
    /// Random number generator shared by all batches
    rng: StdRng,
    /// Seed the RNG was created from, if any
    seed: Option<u64>,
    /// Last day of the order date window
    reference_date: NaiveDate,
}

impl DataGenerator {
    /// Create a new data generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            reference_date: Utc::now().date_naive(),
        }
    }

    /// Create a data generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
            reference_date: Utc::now().date_naive(),
        }
    }

    /// Create a data generator from an optional seed.
    pub fn with_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Set the day the order date window ends on (defaults to today, UTC).
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    /// Get the seed, if the generator was seeded explicitly.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Get the last day of the order date window.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Generate `count` customers.
    pub fn customers(&mut self, count: usize) -> Result<Vec<Customer>, GeneratorError> {
        generate_customers(&mut self.rng, count)
    }

    /// Generate `count` products.
    pub fn products(&mut self, count: usize) -> Result<Vec<Product>, GeneratorError> {
        generate_products(&mut self.rng, count)
    }

    /// Generate `count` orders referencing the given store-assigned customer identities.
    pub fn orders(
        &mut self,
        customer_ids: &[CustomerId],
        count: usize,
    ) -> Result<Vec<Order>, GeneratorError> {
        generate_orders(&mut self.rng, customer_ids, count, self.reference_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = DataGenerator::new(42).with_reference_date(reference_date());
        let mut gen2 = DataGenerator::new(42).with_reference_date(reference_date());

        assert_eq!(gen1.customers(5).unwrap(), gen2.customers(5).unwrap());
        assert_eq!(gen1.products(5).unwrap(), gen2.products(5).unwrap());
        assert_eq!(
            gen1.orders(&[1, 2, 3], 5).unwrap(),
            gen2.orders(&[1, 2, 3], 5).unwrap()
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut gen1 = DataGenerator::new(1);
        let mut gen2 = DataGenerator::new(2);

        assert_ne!(gen1.customers(10).unwrap(), gen2.customers(10).unwrap());
    }

    #[test]
    fn test_seed_accessors() {
        assert_eq!(DataGenerator::new(42).seed(), Some(42));
        assert_eq!(DataGenerator::from_entropy().seed(), None);
        assert_eq!(DataGenerator::with_optional_seed(Some(3)).seed(), Some(3));

        let generator = DataGenerator::new(42).with_reference_date(reference_date());
        assert_eq!(generator.reference_date(), reference_date());
    }

    #[test]
    fn test_orders_window_follows_reference_date() {
        let mut generator = DataGenerator::new(42).with_reference_date(reference_date());
        let orders = generator.orders(&[5], 200).unwrap();

        assert!(orders.iter().all(|o| o.order_date <= reference_date()));
    }

    #[test]
    fn test_orders_without_customers() {
        let mut generator = DataGenerator::new(42);
        let result = generator.orders(&[], 1);
        assert!(matches!(result, Err(GeneratorError::MissingDependency(_))));
    }
}
