// ABOUTME: Read-only queries against the optional_loops staging table
// ABOUTME: Checks the table exists and pulls route names and their data values

use anyhow::{Context, Result};
use tokio_postgres::Client;

/// The staging table every route table is built from
pub const SOURCE_TABLE: &str = "optional_loops";

/// Check whether `optional_loops` exists in the session's current schema
pub async fn source_table_exists(client: &Client) -> Result<bool> {
    let row = client
        .query_one(
            "SELECT EXISTS (
                SELECT 1
                FROM pg_catalog.pg_tables
                WHERE schemaname = current_schema()
                  AND tablename = $1
             )",
            &[&SOURCE_TABLE],
        )
        .await
        .context(format!("Failed to check for '{}' table", SOURCE_TABLE))?;

    Ok(row.get(0))
}

/// List every distinct route name in the staging table
///
/// Names come back sorted so repeated runs process tables in the same order.
pub async fn distinct_names(client: &Client) -> Result<Vec<String>> {
    let rows = client
        .query(
            "SELECT DISTINCT name FROM optional_loops ORDER BY name",
            &[],
        )
        .await
        .context(format!("Failed to list route names in '{}'", SOURCE_TABLE))?;

    Ok(rows.iter().map(|row| row.get(0)).collect())
}

/// Fetch the data values recorded for one route name
pub async fn data_for_name(client: &Client, name: &str) -> Result<Vec<i32>> {
    let rows = client
        .query("SELECT data FROM optional_loops WHERE name = $1", &[&name])
        .await
        .context(format!(
            "Failed to read data for route '{}'",
            crate::utils::sanitize_identifier(name)
        ))?;

    Ok(rows.iter().map(|row| row.get(0)).collect())
}
