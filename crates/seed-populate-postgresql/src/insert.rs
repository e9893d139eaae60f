//! Multi-row INSERT logic for PostgreSQL population.
//!
//! Each batch becomes exactly one `INSERT ... VALUES (...), (...), ...`
//! statement with positional parameters.

use crate::error::PopulatorError;
use seed_core::{Customer, CustomerId, Order, Product, Table};
use tokio_postgres::types::ToSql;
use tokio_postgres::Transaction;
use tracing::debug;

/// PostgreSQL caps the number of bind parameters in one statement.
pub const MAX_BIND_PARAMETERS: usize = 65_535;

type BoxedParam = Box<dyn ToSql + Sync + Send>;

/// Largest batch of `table` rows one statement can carry.
pub fn max_rows_per_statement(table: Table) -> usize {
    MAX_BIND_PARAMETERS / table.columns().len()
}

/// Fail if `rows` rows of `table` cannot go into a single statement.
pub fn check_batch_size(table: Table, rows: usize) -> Result<(), PopulatorError> {
    let max_rows = max_rows_per_statement(table);
    if rows > max_rows {
        return Err(PopulatorError::BatchTooLarge {
            table,
            rows,
            max_rows,
        });
    }
    Ok(())
}

/// Build a multi-row INSERT statement for `row_count` rows.
///
/// Columns with a `bind_type` get an explicit cast on their placeholders. The
/// `returning` column comes back as `int8`, whatever its integer width.
pub fn build_insert_sql(table: Table, row_count: usize, returning: Option<&str>) -> String {
    let columns = table.columns();

    let mut placeholders: Vec<String> = Vec::with_capacity(row_count);
    let mut param_idx = 1;
    for _ in 0..row_count {
        let row_placeholders: Vec<String> = columns
            .iter()
            .map(|column| {
                let p = match column.bind_type {
                    Some(ty) => format!("${param_idx}::{ty}"),
                    None => format!("${param_idx}"),
                };
                param_idx += 1;
                p
            })
            .collect();
        placeholders.push(format!("({})", row_placeholders.join(", ")));
    }

    let mut sql = format!(
        "INSERT INTO \"{}\" ({}) VALUES {}",
        table.name(),
        columns
            .iter()
            .map(|c| format!("\"{}\"", c.name))
            .collect::<Vec<_>>()
            .join(", "),
        placeholders.join(", ")
    );
    if let Some(column) = returning {
        sql.push_str(&format!(" RETURNING \"{column}\"::int8"));
    }
    sql
}

fn customer_params(customers: &[Customer]) -> Vec<BoxedParam> {
    let mut params: Vec<BoxedParam> = Vec::with_capacity(customers.len() * 4);
    for customer in customers {
        params.push(Box::new(customer.name.clone()));
        params.push(Box::new(customer.email.clone()));
        params.push(Box::new(customer.segment.as_str()));
        params.push(Box::new(customer.country.as_str()));
    }
    params
}

fn product_params(products: &[Product]) -> Vec<BoxedParam> {
    let mut params: Vec<BoxedParam> = Vec::with_capacity(products.len() * 5);
    for product in products {
        params.push(Box::new(product.name.clone()));
        params.push(Box::new(product.category.as_str()));
        params.push(Box::new(product.price));
        params.push(Box::new(product.stock_quantity));
        params.push(Box::new(product.description.clone()));
    }
    params
}

fn order_params(orders: &[Order]) -> Vec<BoxedParam> {
    let mut params: Vec<BoxedParam> = Vec::with_capacity(orders.len() * 5);
    for order in orders {
        params.push(Box::new(order.customer_id));
        params.push(Box::new(order.order_date));
        params.push(Box::new(order.total_amount));
        params.push(Box::new(order.status.as_str()));
        params.push(Box::new(order.shipping_address.clone()));
    }
    params
}

fn param_refs(params: &[BoxedParam]) -> Vec<&(dyn ToSql + Sync)> {
    params
        .iter()
        .map(|p| p.as_ref() as &(dyn ToSql + Sync))
        .collect()
}

/// Insert customers and return their identities in input order.
///
/// PostgreSQL emits `RETURNING` rows of a single multi-row `VALUES` insert
/// in the order the rows were listed.
pub async fn insert_customers(
    tx: &Transaction<'_>,
    customers: &[Customer],
) -> Result<Vec<CustomerId>, PopulatorError> {
    if customers.is_empty() {
        return Ok(Vec::new());
    }

    let sql = build_insert_sql(Table::Customers, customers.len(), Some("id"));
    let params = customer_params(customers);
    debug!("Inserting {} customers ({} parameters)", customers.len(), params.len());

    let rows = tx.query(&sql, &param_refs(&params)).await?;
    let ids = rows
        .iter()
        .map(|row| row.try_get::<_, CustomerId>(0))
        .collect::<Result<Vec<_>, _>>()?;

    if ids.len() != customers.len() {
        return Err(PopulatorError::Store(format!(
            "customer insert returned {} identities for {} rows",
            ids.len(),
            customers.len()
        )));
    }
    Ok(ids)
}

/// Insert products.
pub async fn insert_products(
    tx: &Transaction<'_>,
    products: &[Product],
) -> Result<u64, PopulatorError> {
    if products.is_empty() {
        return Ok(0);
    }

    let sql = build_insert_sql(Table::Products, products.len(), None);
    let params = product_params(products);
    debug!("Inserting {} products ({} parameters)", products.len(), params.len());

    Ok(tx.execute(&sql, &param_refs(&params)).await?)
}

/// Insert orders.
pub async fn insert_orders(tx: &Transaction<'_>, orders: &[Order]) -> Result<u64, PopulatorError> {
    if orders.is_empty() {
        return Ok(0);
    }

    let sql = build_insert_sql(Table::Orders, orders.len(), None);
    let params = order_params(orders);
    debug!("Inserting {} orders ({} parameters)", orders.len(), params.len());

    Ok(tx.execute(&sql, &param_refs(&params)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use seed_core::OrderStatus;

    #[test]
    fn test_build_insert_sql() {
        let sql = build_insert_sql(Table::Customers, 2, None);
        assert_eq!(
            sql,
            "INSERT INTO \"customers\" (\"name\", \"email\", \"segment\", \"country\") \
             VALUES ($1, $2, $3, $4), ($5, $6, $7, $8)"
        );
    }

    #[test]
    fn test_build_insert_sql_returning() {
        let sql = build_insert_sql(Table::Customers, 1, Some("id"));
        assert!(sql.ends_with("VALUES ($1, $2, $3, $4) RETURNING \"id\"::int8"));
    }

    #[test]
    fn test_one_placeholder_per_value() {
        let sql = build_insert_sql(Table::Orders, 3, None);
        assert!(sql.contains("($11::int8, $12, $13, $14, $15)"));
        assert!(!sql.contains("$16"));
    }

    #[test]
    fn test_batch_size_limit() {
        // customers bind 4 parameters per row
        assert_eq!(max_rows_per_statement(Table::Customers), 16_383);
        assert!(check_batch_size(Table::Customers, 16_383).is_ok());
        assert!(matches!(
            check_batch_size(Table::Customers, 16_384),
            Err(PopulatorError::BatchTooLarge { rows: 16_384, .. })
        ));
        assert!(check_batch_size(Table::Orders, 0).is_ok());
    }

    #[test]
    fn test_order_params_follow_column_order() {
        let orders = vec![Order {
            customer_id: 4,
            order_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            total_amount: Decimal::new(12345, 2),
            status: OrderStatus::Pending,
            shipping_address: None,
        }];

        let params = order_params(&orders);
        assert_eq!(params.len(), Table::Orders.columns().len());
    }
}
