//! Seed command handlers.
//!
//! This module contains handlers for the populate and check commands.

pub mod check;
pub mod populate;

pub use check::run_check;
pub use populate::{mask_connection_password, run_populate, PopulateReport};
