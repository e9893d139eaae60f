//! Populate command: generate, load, verify, report.

mod logging;
mod run;

pub use logging::{describe_connection, mask_connection_password};
pub use run::{populate_with, run_populate, PopulateReport};
