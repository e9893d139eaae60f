//! Seed runs against the in-memory store.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use seed_core::{
    Category, OrderStatus, RunSummary, Table, DESCRIPTION_MAX_CHARS, PRODUCT_NAME_MAX_CHARS,
};
use seed_generator::{DataGenerator, GeneratorError};
use seed_populate_postgresql::{MemoryStore, PopulatorError, Populator, RunState, SeedCounts};
use shop_seed::seed::populate::populate_with;
use std::collections::HashSet;

const SEED: u64 = 42;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

fn generator() -> DataGenerator {
    DataGenerator::new(SEED).with_reference_date(reference_date())
}

fn counts(customers: usize, products: usize, orders: usize) -> SeedCounts {
    SeedCounts {
        customers,
        products,
        orders,
    }
}

#[tokio::test]
async fn test_small_run_end_to_end() {
    let mut populator = Populator::new(MemoryStore::new(), generator());

    let (metrics, summary) = populate_with(&mut populator, counts(5, 3, 10), false)
        .await
        .unwrap();
    let summary = summary.expect("verification should succeed on the memory store");

    assert_eq!(populator.state(), RunState::Done);
    assert_eq!(summary.customers, 5);
    assert_eq!(summary.products, 3);
    assert_eq!(summary.orders, 10);
    assert_eq!(metrics.statement_count, 3);

    let store = populator.into_store();
    let expected_revenue: Decimal = store.orders().iter().map(|(_, o)| o.total_amount).sum();
    let expected_delivered = store
        .orders()
        .iter()
        .filter(|(_, o)| o.status == OrderStatus::Delivered)
        .count() as u64;
    assert_eq!(summary.total_revenue, expected_revenue);
    assert_eq!(summary.total_revenue, metrics.generated_revenue);
    assert_eq!(summary.delivered_orders, expected_delivered);

    let rendered = summary.to_string();
    assert!(rendered.starts_with("Customers: 5\nProducts: 3\nOrders: 10\nTotal Revenue: $"));
}

#[tokio::test]
async fn test_rerun_appends_disjoint_rows() {
    let mut populator = Populator::new(MemoryStore::new(), generator());

    populator.run(counts(5, 3, 10)).await.unwrap();
    populator.run(counts(5, 3, 10)).await.unwrap();
    let summary = populator.verify().await.unwrap();

    assert_eq!(summary.customers, 10);
    assert_eq!(summary.products, 6);
    assert_eq!(summary.orders, 20);

    let store = populator.into_store();
    let ids: Vec<_> = store.customers().iter().map(|(id, _)| *id).collect();
    let distinct: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(distinct.len(), 10);

    // Rows are committed in run order: the first 5 customers and 10 orders
    // belong to the first run
    let (first_ids, second_ids) = ids.split_at(5);
    let (first_orders, second_orders) = store.orders().split_at(10);
    assert!(first_orders
        .iter()
        .all(|(_, o)| first_ids.contains(&o.customer_id)));
    assert!(second_orders
        .iter()
        .all(|(_, o)| second_ids.contains(&o.customer_id)));
}

#[tokio::test]
async fn test_failed_order_insert_leaves_store_unchanged() {
    let store = MemoryStore::new().fail_next_insert(Table::Orders);
    let mut populator = Populator::new(store, generator());

    let result = populate_with(&mut populator, counts(5, 3, 10), false).await;

    assert!(result.is_err());
    assert_eq!(populator.state(), RunState::Failed);
    for table in Table::ALL {
        assert_eq!(populator.store().row_count(table), 0, "{table} should be empty");
    }

    // The next run starts from a clean slate
    populator.run(counts(5, 3, 10)).await.unwrap();
    let summary = populator.verify().await.unwrap();
    assert_eq!(summary.customers, 5);
    assert_eq!(summary.orders, 10);
}

#[tokio::test]
async fn test_orders_without_customers_write_nothing() {
    let mut populator = Populator::new(MemoryStore::new(), generator());

    let err = populator.run(counts(0, 3, 10)).await.unwrap_err();

    assert!(matches!(
        err,
        PopulatorError::Generator(GeneratorError::MissingDependency(_))
    ));
    assert_eq!(populator.store().statement_count(), 0);
}

#[tokio::test]
async fn test_zero_orders_needs_no_customers() {
    let mut populator = Populator::new(MemoryStore::new(), generator());

    populator.run(counts(0, 4, 0)).await.unwrap();
    let summary = populator.verify().await.unwrap();

    assert_eq!(
        summary,
        RunSummary {
            products: 4,
            ..RunSummary::default()
        }
    );
}

#[tokio::test]
async fn test_same_seed_same_dataset() {
    let mut first = Populator::new(MemoryStore::new(), generator());
    let mut second = Populator::new(MemoryStore::new(), generator());

    first.run(counts(20, 10, 40)).await.unwrap();
    second.run(counts(20, 10, 40)).await.unwrap();

    let (first, second) = (first.into_store(), second.into_store());
    assert_eq!(first.customers(), second.customers());
    assert_eq!(first.products(), second.products());
    assert_eq!(first.orders(), second.orders());
}

#[tokio::test]
async fn test_loaded_rows_respect_field_constraints() {
    let mut populator = Populator::new(MemoryStore::new(), generator());
    populator.run(counts(50, 200, 1000)).await.unwrap();
    let store = populator.into_store();

    let customer_ids: Vec<_> = store.customers().iter().map(|(id, _)| *id).collect();
    let window_start = reference_date().checked_sub_days(Days::new(365)).unwrap();

    for (_, customer) in store.customers() {
        assert!(!customer.name.is_empty());
        assert!(customer.email.contains('@'));
    }

    for (_, product) in store.products() {
        assert!(product.name.chars().count() <= PRODUCT_NAME_MAX_CHARS);
        assert!(Category::ALL.contains(&product.category));
        assert!(product.price >= Decimal::new(1_000, 2) && product.price <= Decimal::new(200_000, 2));
        assert_eq!(product.price.scale(), 2);
        assert!((0..=500).contains(&product.stock_quantity));
        if let Some(description) = &product.description {
            assert!(description.chars().count() <= DESCRIPTION_MAX_CHARS);
        }
    }

    for (_, order) in store.orders() {
        assert!(customer_ids.contains(&order.customer_id));
        assert!(order.order_date >= window_start && order.order_date <= reference_date());
        assert!(
            order.total_amount >= Decimal::new(5_000, 2)
                && order.total_amount <= Decimal::new(500_000, 2)
        );
        assert_eq!(order.total_amount.scale(), 2);
        assert!(OrderStatus::ALL.contains(&order.status));
    }
}
