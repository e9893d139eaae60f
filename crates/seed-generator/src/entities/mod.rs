//! Entity generators.
//!
//! Each generator turns a count (and, for orders, the customer identities
//! already assigned by the store) into an ordered batch of records. Field
//! ranges, truncation and referential validity hold for every record no
//! matter how the RNG is seeded.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::generate_customers;
pub use order::{generate_orders, ORDER_STATUS_WEIGHTS, ORDER_WINDOW_DAYS};
pub use product::{base_terms, generate_products};
