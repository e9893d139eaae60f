//! Seed run integration tests.
//!
//! Each test runs the generate -> load -> verify workflow end to end:
//! 1. Generates a dataset with a fixed seed
//! 2. Loads it through a single transaction
//! 3. Verifies counts and aggregates against what was generated
//!
//! The in-memory tests need no server. The PostgreSQL test is ignored by
//! default and reads POSTGRESQL_TEST_URL.

mod memory_seed;
mod postgresql_seed;
