//! shop-seed library
//!
//! Command handlers behind the `shop-seed` binary. The dataset model lives in
//! `seed_core`, generation in `seed_generator` and the transactional loader in
//! `seed_populate_postgresql`; this crate wires them to the command line.
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed with the default counts (100 customers, 50 products, 200 orders)
//! shop-seed populate --create-schema
//!
//! # Check that the configured database answers
//! shop-seed check
//! ```

pub mod seed;
