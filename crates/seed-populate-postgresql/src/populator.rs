//! Transactional populator: generate, load, commit, verify.

use crate::args::SeedCountArgs;
use crate::error::PopulatorError;
use crate::insert::check_batch_size;
use crate::store::{SeedStore, SeedTransaction};
use rust_decimal::Decimal;
use seed_core::{Customer, Product, RunSummary, Table};
use seed_generator::{DataGenerator, GeneratorError};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Record counts for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedCounts {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            customers: 100,
            products: 50,
            orders: 200,
        }
    }
}

impl From<&SeedCountArgs> for SeedCounts {
    fn from(args: &SeedCountArgs) -> Self {
        Self {
            customers: args.customers,
            products: args.products,
            orders: args.orders,
        }
    }
}

/// Where a run currently is.
///
/// `Idle → Generating → Loading → Committed → Verifying → Done`, or
/// `Failed` from any step before `Committed`. A failed run leaves nothing in
/// the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunState {
    Idle,
    Generating,
    Loading,
    Committed,
    Verifying,
    Done,
    Failed,
}

/// Metrics from a populate run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PopulateMetrics {
    /// Number of customers inserted.
    pub customers_inserted: u64,
    /// Number of products inserted.
    pub products_inserted: u64,
    /// Number of orders inserted.
    pub orders_inserted: u64,
    /// Number of INSERT statements issued.
    pub statement_count: u64,
    /// Sum of `total_amount` over the generated orders.
    pub generated_revenue: Decimal,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent inserting data.
    pub insert_duration: Duration,
}

impl PopulateMetrics {
    /// Total rows inserted across all tables.
    pub fn rows_inserted(&self) -> u64 {
        self.customers_inserted + self.products_inserted + self.orders_inserted
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

fn advance(state: &mut RunState, next: RunState) {
    debug!("Run state: {:?} -> {:?}", state, next);
    *state = next;
}

/// Checks that need no store access: fail before anything is written.
fn preflight(counts: &SeedCounts) -> Result<(), PopulatorError> {
    if counts.orders > 0 && counts.customers == 0 {
        return Err(GeneratorError::MissingDependency(format!(
            "{} orders requested but no customers will be created",
            counts.orders
        ))
        .into());
    }
    check_batch_size(Table::Customers, counts.customers)?;
    check_batch_size(Table::Products, counts.products)?;
    check_batch_size(Table::Orders, counts.orders)?;
    Ok(())
}

/// Populator that generates a dataset and loads it into a [`SeedStore`] as
/// one transaction.
pub struct Populator<S: SeedStore> {
    store: S,
    generator: DataGenerator,
    state: RunState,
}

impl<S: SeedStore> Populator<S> {
    /// Create a new populator.
    pub fn new(store: S, generator: DataGenerator) -> Self {
        Self {
            store,
            generator,
            state: RunState::Idle,
        }
    }

    /// Current state of the latest run.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Create the seeded tables if they are missing (outside any run).
    pub async fn create_schema(&mut self) -> Result<(), PopulatorError> {
        self.store.create_schema().await
    }

    /// Generate and load one dataset.
    ///
    /// Customers are inserted first; the identities the store assigns to them
    /// are the only ones orders may reference. Products and orders follow in
    /// the same transaction, which commits only if every batch succeeded.
    /// On any error the transaction is rolled back and the error returned.
    pub async fn run(&mut self, counts: SeedCounts) -> Result<PopulateMetrics, PopulatorError> {
        let result = self.run_once(counts).await;
        if let Err(e) = &result {
            warn!("Run failed, nothing was committed: {}", e);
            advance(&mut self.state, RunState::Failed);
        }
        result
    }

    async fn run_once(&mut self, counts: SeedCounts) -> Result<PopulateMetrics, PopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        self.state = RunState::Idle;

        advance(&mut self.state, RunState::Generating);
        preflight(&counts)?;

        info!(
            "Generating {} customers and {} products",
            counts.customers, counts.products
        );
        let gen_start = Instant::now();
        let customers = self.generator.customers(counts.customers)?;
        let products = self.generator.products(counts.products)?;
        metrics.generation_duration += gen_start.elapsed();

        advance(&mut self.state, RunState::Loading);
        let mut tx = self.store.begin().await?;

        let loaded = load_batches(
            &mut *tx,
            &mut self.generator,
            &customers,
            &products,
            counts.orders,
            &mut metrics,
        )
        .await;

        if let Err(e) = loaded {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed: {}", rollback_err);
            }
            return Err(e);
        }

        tx.commit().await?;
        advance(&mut self.state, RunState::Committed);

        metrics.total_duration = start_time.elapsed();
        info!(
            "Committed {} rows in {:?} ({:.2} rows/sec)",
            metrics.rows_inserted(),
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Read back aggregates for the committed run.
    ///
    /// Never affects committed data. The run ends in [`RunState::Done`]
    /// whether or not the queries succeed.
    pub async fn verify(&mut self) -> Result<RunSummary, PopulatorError> {
        if self.state != RunState::Committed {
            return Err(PopulatorError::Verification(format!(
                "no committed run to verify (state: {:?})",
                self.state
            )));
        }

        advance(&mut self.state, RunState::Verifying);
        let result = self.store.summary().await.map_err(|e| match e {
            PopulatorError::Verification(_) => e,
            other => PopulatorError::Verification(other.to_string()),
        });
        advance(&mut self.state, RunState::Done);
        result
    }
}

/// Issue every batch of a run through `tx`.
async fn load_batches(
    tx: &mut (dyn SeedTransaction + '_),
    generator: &mut DataGenerator,
    customers: &[Customer],
    products: &[Product],
    order_count: usize,
    metrics: &mut PopulateMetrics,
) -> Result<(), PopulatorError> {
    let insert_start = Instant::now();
    let customer_ids = tx.insert_customers(customers).await?;
    metrics.customers_inserted = customer_ids.len() as u64;
    metrics.statement_count += u64::from(!customers.is_empty());
    info!("Inserted {} customers", customer_ids.len());
    metrics.insert_duration += insert_start.elapsed();

    let orders = if order_count > 0 {
        let gen_start = Instant::now();
        let orders = generator.orders(&customer_ids, order_count)?;
        metrics.generation_duration += gen_start.elapsed();
        orders
    } else {
        Vec::new()
    };
    metrics.generated_revenue = orders.iter().map(|o| o.total_amount).sum();

    let insert_start = Instant::now();
    metrics.products_inserted = tx.insert_products(products).await?;
    metrics.statement_count += u64::from(!products.is_empty());
    info!("Inserted {} products", metrics.products_inserted);

    metrics.orders_inserted = tx.insert_orders(&orders).await?;
    metrics.statement_count += u64::from(!orders.is_empty());
    info!("Inserted {} orders", metrics.orders_inserted);
    metrics.insert_duration += insert_start.elapsed();

    Ok(())
}
