//! Populate command runner.

use anyhow::Context;
use chrono::NaiveDate;
use seed_core::RunSummary;
use seed_generator::DataGenerator;
use seed_populate_postgresql::{
    MemoryStore, PopulateMetrics, PostgreSQLPopulateArgs, PostgreSQLStore, Populator, SeedCounts,
    SeedStore,
};
use serde::Serialize;

use super::describe_connection;

/// Everything a populate run reports, rendered as text or JSON.
#[derive(Debug, Serialize)]
pub struct PopulateReport {
    pub dry_run: bool,
    pub seed: Option<u64>,
    pub reference_date: NaiveDate,
    pub counts: SeedCounts,
    /// Absent when verification failed after a successful commit.
    pub summary: Option<RunSummary>,
    pub metrics: PopulateMetrics,
}

impl PopulateReport {
    /// Human-readable form: the verified summary, or the inserted counts when
    /// verification could not run.
    pub fn render_text(&self) -> String {
        match &self.summary {
            Some(summary) => summary.to_string(),
            None => format!(
                "Customers: {}\nProducts: {}\nOrders: {}\n(verification unavailable)",
                self.metrics.customers_inserted,
                self.metrics.products_inserted,
                self.metrics.orders_inserted
            ),
        }
    }
}

/// Run populate command: generate a dataset, load it atomically, verify it.
pub async fn run_populate(args: PostgreSQLPopulateArgs) -> anyhow::Result<()> {
    let counts = SeedCounts::from(&args.counts);
    let generator = DataGenerator::with_optional_seed(args.counts.seed);
    let seed = generator.seed();
    let reference_date = generator.reference_date();

    let (metrics, summary) = if args.dry_run {
        tracing::info!(
            "[DRY-RUN] Would populate PostgreSQL with {} customers, {} products, {} orders (seed={:?})",
            counts.customers,
            counts.products,
            counts.orders,
            seed
        );
        tracing::info!(
            "[DRY-RUN] Connection: {}",
            describe_connection(&args.connection)
        );
        tracing::info!("[DRY-RUN] Loading into an in-memory store instead");

        let mut populator = Populator::new(MemoryStore::new(), generator);
        populate_with(&mut populator, counts, args.create_schema).await?
    } else {
        let config = args
            .connection
            .resolve()
            .context("Failed to resolve PostgreSQL connection parameters")?;

        tracing::info!(
            "Populating PostgreSQL at {} with {} customers, {} products, {} orders (seed={:?})",
            describe_connection(&args.connection),
            counts.customers,
            counts.products,
            counts.orders,
            seed
        );

        let store = PostgreSQLStore::connect(&config)
            .await
            .context("Failed to connect to PostgreSQL")?;
        let mut populator = Populator::new(store, generator);
        populate_with(&mut populator, counts, args.create_schema).await?
    };

    let report = PopulateReport {
        dry_run: args.dry_run,
        seed,
        reference_date,
        counts,
        summary,
        metrics,
    };

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize run summary")?;
        println!("{json}");
    } else {
        println!("{}", report.render_text());
    }

    Ok(())
}

/// Create the schema if asked, run once and verify.
///
/// A failed run is an error. A failed verification after a successful commit
/// is only logged, and the summary is `None`.
pub async fn populate_with<S: SeedStore>(
    populator: &mut Populator<S>,
    counts: SeedCounts,
    create_schema: bool,
) -> anyhow::Result<(PopulateMetrics, Option<RunSummary>)> {
    if create_schema {
        populator
            .create_schema()
            .await
            .context("Failed to create schema")?;
    }

    let metrics = populator
        .run(counts)
        .await
        .context("Seed run failed and was rolled back")?;

    tracing::info!(
        "Populate completed: {} rows committed in {:?} ({:.2} rows/sec, {} statements)",
        metrics.rows_inserted(),
        metrics.total_duration,
        metrics.rows_per_second(),
        metrics.statement_count
    );

    let summary = match populator.verify().await {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::warn!("Verification failed, committed data is unaffected: {}", e);
            None
        }
    };

    Ok((metrics, summary))
}
