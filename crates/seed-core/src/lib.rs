//! Core types for the shop-seed dataset generator.
//!
//! This crate provides the types shared by the generator and the loaders:
//!
//! - [`Customer`], [`Product`], [`Order`] - one synthetic record per table row
//! - [`Segment`], [`Country`], [`Category`], [`OrderStatus`] - categorical attributes
//! - [`Table`] - table names, insertable columns and DDL
//! - [`RunSummary`] - aggregate view of a loaded store
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator            (produces entity batches)
//!    │
//!    └─── seed-populate-postgresql  (loads batches, reads summaries)
//! ```

pub mod entities;
pub mod schema;
pub mod summary;

// Re-exports for convenience
pub use entities::{
    Category, Country, Customer, CustomerId, Order, OrderStatus, Product, Segment,
    DESCRIPTION_MAX_CHARS, PRODUCT_NAME_MAX_CHARS,
};
pub use schema::{ColumnDefinition, Table};
pub use summary::{format_currency, RunSummary};
