//! Check command: verify that the configured database answers.

use anyhow::Context;
use seed_core::Table;
use seed_populate_postgresql::{PostgreSQLConnectionArgs, PostgreSQLStore};

use super::populate::describe_connection;

/// Render the `public` table listing, marking the seeded tables.
pub fn render_table_listing(tables: &[String]) -> String {
    let mut out = String::from("Tables in public schema:");
    if tables.is_empty() {
        out.push_str("\n  (none)");
    }
    for name in tables {
        let marker = if Table::ALL.iter().any(|t| t.name() == name) {
            " (seed table)"
        } else {
            ""
        };
        out.push_str(&format!("\n  {name}{marker}"));
    }

    let missing: Vec<&str> = Table::ALL
        .iter()
        .map(|t| t.name())
        .filter(|name| !tables.iter().any(|t| t == name))
        .collect();
    if !missing.is_empty() {
        out.push_str(&format!(
            "\nMissing seed tables: {} (run populate with --create-schema)",
            missing.join(", ")
        ));
    }
    out
}

/// Run check command.
pub async fn run_check(connection: PostgreSQLConnectionArgs) -> anyhow::Result<()> {
    let config = connection
        .resolve()
        .context("Failed to resolve PostgreSQL connection parameters")?;

    tracing::info!("Connecting to {}", describe_connection(&connection));
    let store = PostgreSQLStore::connect(&config)
        .await
        .context("Failed to connect to PostgreSQL")?;

    let version = store
        .server_version()
        .await
        .context("Failed to read server version")?;
    let tables = store
        .public_tables()
        .await
        .context("Failed to list tables")?;

    println!("Connected: {version}");
    println!("{}", render_table_listing(&tables));
    Ok(())
}
