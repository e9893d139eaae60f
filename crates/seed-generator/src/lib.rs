//! Synthetic data generator for the shop-seed dataset.
//!
//! This crate produces batches of customers, products and orders with
//! realistic attribute distributions. Nothing here touches a store: the
//! generators are pure functions of an entropy source, so a seeded RNG
//! reproduces the same batches.
//!
//! # Architecture
//!
//! ```text
//! generators (attribute sampler)
//!        │   one_of / weighted / int_range / currency_range / date_range / text
//!        ▼
//! entities (customer / product / order)
//!        │   count → Vec<record>
//!        ▼
//! ┌──────────────────┐
//! │  DataGenerator   │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - reference day │
//! └──────────────────┘
//! ```
//!
//! Orders reference customers by store-assigned identity, so they are
//! generated only after the customer batch has been inserted:
//!
//! ```rust
//! use seed_generator::DataGenerator;
//!
//! let mut generator = DataGenerator::new(42);
//! let customers = generator.customers(3).unwrap();
//! assert_eq!(customers.len(), 3);
//!
//! // Identities returned by the store for the three customers
//! let ids = [101, 102, 103];
//! let orders = generator.orders(&ids, 10).unwrap();
//! assert!(orders.iter().all(|o| ids.contains(&o.customer_id)));
//! ```

pub mod entities;
pub mod error;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use error::GeneratorError;
pub use generator::DataGenerator;
