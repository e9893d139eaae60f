//! Store abstraction used by the populator.
//!
//! A [`SeedStore`] hands out one [`SeedTransaction`] per run. Every batch of
//! the run goes through that transaction, and nothing is visible to other
//! sessions until [`SeedTransaction::commit`] succeeds. Dropping a transaction
//! without committing discards everything it wrote.

use crate::error::PopulatorError;
use async_trait::async_trait;
use seed_core::{Customer, CustomerId, Order, Product, RunSummary};

/// A store that can be seeded and summarized.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Create the seeded tables if they do not exist yet.
    async fn create_schema(&mut self) -> Result<(), PopulatorError>;

    /// Open the transaction for one run.
    async fn begin<'a>(&'a mut self) -> Result<Box<dyn SeedTransaction + 'a>, PopulatorError>;

    /// Read row counts and order aggregates.
    async fn summary(&self) -> Result<RunSummary, PopulatorError>;
}

/// The single transaction a run writes through.
#[async_trait]
pub trait SeedTransaction: Send {
    /// Insert customers with one statement and return their store-assigned
    /// identities, in the same order as `customers`.
    async fn insert_customers(
        &mut self,
        customers: &[Customer],
    ) -> Result<Vec<CustomerId>, PopulatorError>;

    /// Insert products with one statement.
    async fn insert_products(&mut self, products: &[Product]) -> Result<u64, PopulatorError>;

    /// Insert orders with one statement.
    async fn insert_orders(&mut self, orders: &[Order]) -> Result<u64, PopulatorError>;

    /// Make every insert of the run visible.
    async fn commit(self: Box<Self>) -> Result<(), PopulatorError>;

    /// Discard every insert of the run.
    async fn rollback(self: Box<Self>) -> Result<(), PopulatorError>;
}
