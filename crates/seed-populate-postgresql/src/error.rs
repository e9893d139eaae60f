//! Error types for the PostgreSQL populator.

use seed_core::Table;
use seed_generator::GeneratorError;
use thiserror::Error;

/// Errors that can occur while seeding a store.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// A required connectivity parameter is absent.
    #[error("Configuration missing: {0} is not set")]
    ConfigurationMissing(String),

    /// A connectivity parameter is present but unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Sampling or entity generation failed.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Store-side failure that is not a driver error (malformed batch, rejected row).
    #[error("Store error: {0}")]
    Store(String),

    /// A batch does not fit in a single INSERT statement.
    #[error("Batch for '{table}' has {rows} rows, a single statement holds at most {max_rows}")]
    BatchTooLarge {
        table: Table,
        rows: usize,
        max_rows: usize,
    },

    /// Post-commit aggregate query failed.
    #[error("Verification error: {0}")]
    Verification(String),
}
