//! In-process seed store.
//!
//! Behaves like the PostgreSQL store where the populator can observe it:
//! serial identities handed out on insert (and not reused after a rollback),
//! `orders.customer_id` checked against existing customers, writes invisible
//! until commit. Used for `--dry-run` and for exercising runs without a server.

use crate::error::PopulatorError;
use crate::store::{SeedStore, SeedTransaction};
use async_trait::async_trait;
use rust_decimal::Decimal;
use seed_core::{Customer, CustomerId, Order, OrderStatus, Product, RunSummary, Table};
use std::collections::HashSet;
use tracing::debug;

/// Committed tables plus the serial counters backing their `id` columns.
#[derive(Debug, Default)]
pub struct MemoryStore {
    customers: Vec<(CustomerId, Customer)>,
    products: Vec<(i64, Product)>,
    orders: Vec<(i64, Order)>,
    customer_serial: i64,
    product_serial: i64,
    order_serial: i64,
    statements: u64,
    fail_on: Option<Table>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next insert into `table` fail, to exercise rollback.
    pub fn fail_next_insert(mut self, table: Table) -> Self {
        self.fail_on = Some(table);
        self
    }

    /// Committed customers with their identities.
    pub fn customers(&self) -> &[(CustomerId, Customer)] {
        &self.customers
    }

    /// Committed products with their identities.
    pub fn products(&self) -> &[(i64, Product)] {
        &self.products
    }

    /// Committed orders with their identities.
    pub fn orders(&self) -> &[(i64, Order)] {
        &self.orders
    }

    /// Number of committed rows in `table`.
    pub fn row_count(&self, table: Table) -> u64 {
        match table {
            Table::Customers => self.customers.len() as u64,
            Table::Products => self.products.len() as u64,
            Table::Orders => self.orders.len() as u64,
        }
    }

    /// Number of INSERT statements executed, committed or not.
    pub fn statement_count(&self) -> u64 {
        self.statements
    }

    fn next_serial(serial: &mut i64) -> i64 {
        *serial += 1;
        *serial
    }

    fn check_injected_failure(&mut self, table: Table) -> Result<(), PopulatorError> {
        if self.fail_on == Some(table) {
            self.fail_on = None;
            return Err(PopulatorError::Store(format!(
                "injected failure inserting into {table}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn create_schema(&mut self) -> Result<(), PopulatorError> {
        Ok(())
    }

    async fn begin<'a>(&'a mut self) -> Result<Box<dyn SeedTransaction + 'a>, PopulatorError> {
        Ok(Box::new(MemoryTransaction {
            store: self,
            customers: Vec::new(),
            products: Vec::new(),
            orders: Vec::new(),
        }))
    }

    async fn summary(&self) -> Result<RunSummary, PopulatorError> {
        Ok(RunSummary {
            customers: self.row_count(Table::Customers),
            products: self.row_count(Table::Products),
            orders: self.row_count(Table::Orders),
            total_revenue: self
                .orders
                .iter()
                .map(|(_, order)| order.total_amount)
                .sum::<Decimal>(),
            delivered_orders: self
                .orders
                .iter()
                .filter(|(_, order)| order.status == OrderStatus::Delivered)
                .count() as u64,
        })
    }
}

/// Writes staged by one run, applied to the store on commit.
pub struct MemoryTransaction<'a> {
    store: &'a mut MemoryStore,
    customers: Vec<(CustomerId, Customer)>,
    products: Vec<(i64, Product)>,
    orders: Vec<(i64, Order)>,
}

#[async_trait]
impl<'a> SeedTransaction for MemoryTransaction<'a> {
    async fn insert_customers(
        &mut self,
        customers: &[Customer],
    ) -> Result<Vec<CustomerId>, PopulatorError> {
        if customers.is_empty() {
            return Ok(Vec::new());
        }
        self.store.statements += 1;
        self.store.check_injected_failure(Table::Customers)?;

        let mut ids = Vec::with_capacity(customers.len());
        for customer in customers {
            let id = MemoryStore::next_serial(&mut self.store.customer_serial);
            self.customers.push((id, customer.clone()));
            ids.push(id);
        }
        Ok(ids)
    }

    async fn insert_products(&mut self, products: &[Product]) -> Result<u64, PopulatorError> {
        if products.is_empty() {
            return Ok(0);
        }
        self.store.statements += 1;
        self.store.check_injected_failure(Table::Products)?;

        for product in products {
            let id = MemoryStore::next_serial(&mut self.store.product_serial);
            self.products.push((id, product.clone()));
        }
        Ok(products.len() as u64)
    }

    async fn insert_orders(&mut self, orders: &[Order]) -> Result<u64, PopulatorError> {
        if orders.is_empty() {
            return Ok(0);
        }
        self.store.statements += 1;
        self.store.check_injected_failure(Table::Orders)?;

        let known: HashSet<CustomerId> = self
            .store
            .customers
            .iter()
            .chain(self.customers.iter())
            .map(|(id, _)| *id)
            .collect();
        if let Some(order) = orders.iter().find(|o| !known.contains(&o.customer_id)) {
            return Err(PopulatorError::Store(format!(
                "orders.customer_id {} does not reference a customer",
                order.customer_id
            )));
        }

        for order in orders {
            let id = MemoryStore::next_serial(&mut self.store.order_serial);
            self.orders.push((id, order.clone()));
        }
        Ok(orders.len() as u64)
    }

    async fn commit(self: Box<Self>) -> Result<(), PopulatorError> {
        let MemoryTransaction {
            store,
            customers,
            products,
            orders,
        } = *self;
        debug!(
            "Committing {} customers, {} products, {} orders",
            customers.len(),
            products.len(),
            orders.len()
        );
        store.customers.extend(customers);
        store.products.extend(products);
        store.orders.extend(orders);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), PopulatorError> {
        debug!(
            "Discarding {} customers, {} products, {} orders",
            self.customers.len(),
            self.products.len(),
            self.orders.len()
        );
        Ok(())
    }
}
