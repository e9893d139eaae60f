//! Transactional PostgreSQL loader for the shop-seed dataset.
//!
//! A [`Populator`] generates customers and products, inserts customers first
//! to learn their store-assigned identities, generates orders referencing
//! those identities, then inserts products and orders. Every batch of a run
//! goes through one [`SeedTransaction`]: the run commits as a whole or leaves
//! nothing behind.
//!
//! Two stores implement [`SeedStore`]: [`PostgreSQLStore`] over
//! `tokio-postgres`, and [`MemoryStore`] for dry runs and tests.
//!
//! # Example
//!
//! ```ignore
//! use seed_generator::DataGenerator;
//! use seed_populate_postgresql::{MemoryStore, Populator, SeedCounts};
//!
//! let mut populator = Populator::new(MemoryStore::new(), DataGenerator::new(42));
//! let metrics = populator.run(SeedCounts::default()).await?;
//! let summary = populator.verify().await?;
//! println!("{summary}");
//! ```

pub mod args;
pub mod error;
pub mod insert;
pub mod memory;
pub mod populator;
pub mod postgresql;
pub mod store;
pub mod verify;

pub use args::{PostgreSQLConnectionArgs, PostgreSQLPopulateArgs, SeedCountArgs};
pub use error::PopulatorError;
pub use memory::MemoryStore;
pub use populator::{PopulateMetrics, Populator, RunState, SeedCounts};
pub use postgresql::PostgreSQLStore;
pub use store::{SeedStore, SeedTransaction};
