//! PostgreSQL-backed seed store.

use crate::error::PopulatorError;
use crate::insert::{insert_customers, insert_orders, insert_products};
use crate::store::{SeedStore, SeedTransaction};
use crate::verify::read_summary;
use async_trait::async_trait;
use seed_core::{Customer, CustomerId, Order, Product, RunSummary, Table};
use tokio_postgres::{Client, Config, NoTls, Transaction};
use tracing::{debug, info};

/// Seed store over a single `tokio-postgres` connection.
pub struct PostgreSQLStore {
    client: Client,
}

impl PostgreSQLStore {
    /// Connect and run a round trip to make sure the server answers.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config: tokio_postgres::Config =
    ///     "host=localhost user=postgres password=postgres dbname=shop".parse()?;
    /// let store = PostgreSQLStore::connect(&config).await?;
    /// ```
    pub async fn connect(config: &Config) -> Result<Self, PopulatorError> {
        let (client, connection) = config.connect(NoTls).await?;

        // Spawn the connection task
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        // Test connection
        client.simple_query("SELECT 1").await?;

        Ok(Self { client })
    }

    /// Create a store from an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Server version string (`SELECT version()`).
    pub async fn server_version(&self) -> Result<String, PopulatorError> {
        let row = self.client.query_one("SELECT version()", &[]).await?;
        Ok(row.try_get(0)?)
    }

    /// Names of the tables in the `public` schema, sorted.
    pub async fn public_tables(&self) -> Result<Vec<String>, PopulatorError> {
        let rows = self
            .client
            .query(
                "SELECT table_name::text FROM information_schema.tables \
                 WHERE table_schema = 'public' ORDER BY table_name",
                &[],
            )
            .await?;
        rows.iter()
            .map(|row| row.try_get(0).map_err(PopulatorError::from))
            .collect()
    }
}

#[async_trait]
impl SeedStore for PostgreSQLStore {
    async fn create_schema(&mut self) -> Result<(), PopulatorError> {
        for table in Table::ALL {
            let sql = table.create_table_sql();
            info!("Creating table if missing: {}", table);
            debug!("DDL: {}", sql);
            self.client.execute(sql.as_str(), &[]).await?;
        }
        Ok(())
    }

    async fn begin<'a>(&'a mut self) -> Result<Box<dyn SeedTransaction + 'a>, PopulatorError> {
        let tx = self.client.transaction().await?;
        debug!("Transaction opened");
        Ok(Box::new(PostgreSQLTransaction { tx }))
    }

    async fn summary(&self) -> Result<RunSummary, PopulatorError> {
        read_summary(&self.client).await
    }
}

/// One run's transaction. Dropping it without commit rolls back.
pub struct PostgreSQLTransaction<'a> {
    tx: Transaction<'a>,
}

#[async_trait]
impl<'a> SeedTransaction for PostgreSQLTransaction<'a> {
    async fn insert_customers(
        &mut self,
        customers: &[Customer],
    ) -> Result<Vec<CustomerId>, PopulatorError> {
        insert_customers(&self.tx, customers).await
    }

    async fn insert_products(&mut self, products: &[Product]) -> Result<u64, PopulatorError> {
        insert_products(&self.tx, products).await
    }

    async fn insert_orders(&mut self, orders: &[Order]) -> Result<u64, PopulatorError> {
        insert_orders(&self.tx, orders).await
    }

    async fn commit(self: Box<Self>) -> Result<(), PopulatorError> {
        self.tx.commit().await?;
        debug!("Transaction committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), PopulatorError> {
        self.tx.rollback().await?;
        debug!("Transaction rolled back");
        Ok(())
    }
}
