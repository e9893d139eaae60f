//! Post-commit aggregate checks.

use crate::error::PopulatorError;
use rust_decimal::Decimal;
use seed_core::{OrderStatus, RunSummary, Table};
use tokio_postgres::Client;

/// Get the row count for a table.
pub async fn row_count(client: &Client, table: Table) -> Result<u64, PopulatorError> {
    let sql = format!("SELECT COUNT(*) FROM \"{}\"", table.name());
    let row = client
        .query_one(&sql, &[])
        .await
        .map_err(|e| PopulatorError::Verification(format!("counting {table}: {e}")))?;
    let count: i64 = row
        .try_get(0)
        .map_err(|e| PopulatorError::Verification(format!("counting {table}: {e}")))?;
    Ok(count as u64)
}

/// Read row counts, total revenue and delivered orders.
pub async fn read_summary(client: &Client) -> Result<RunSummary, PopulatorError> {
    let customers = row_count(client, Table::Customers).await?;
    let products = row_count(client, Table::Products).await?;
    let orders = row_count(client, Table::Orders).await?;

    let row = client
        .query_one(
            "SELECT COALESCE(SUM(total_amount), 0)::numeric FROM \"orders\"",
            &[],
        )
        .await
        .map_err(|e| PopulatorError::Verification(format!("summing order totals: {e}")))?;
    let total_revenue: Decimal = row
        .try_get(0)
        .map_err(|e| PopulatorError::Verification(format!("summing order totals: {e}")))?;

    let row = client
        .query_one(
            "SELECT COUNT(*) FROM \"orders\" WHERE status = $1",
            &[&OrderStatus::Delivered.as_str()],
        )
        .await
        .map_err(|e| PopulatorError::Verification(format!("counting delivered orders: {e}")))?;
    let delivered: i64 = row
        .try_get(0)
        .map_err(|e| PopulatorError::Verification(format!("counting delivered orders: {e}")))?;

    Ok(RunSummary {
        customers,
        products,
        orders,
        total_revenue,
        delivered_orders: delivered as u64,
    })
}
