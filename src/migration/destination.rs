// ABOUTME: Writes the per-route destination tables
// ABOUTME: Drops and recreates a route table, then bulk-loads its data values

use crate::migration::table_name::TableName;
use anyhow::{Context, Result};
use tokio_postgres::Transaction;

/// DDL for a fresh destination table
pub fn create_table_sql(table: &TableName) -> String {
    format!(
        "CREATE TABLE {} (
            id SERIAL PRIMARY KEY,
            data INTEGER NOT NULL
         )",
        table.quoted()
    )
}

/// Drop the table if it exists and create it empty
pub async fn recreate_table(tx: &Transaction<'_>, table: &TableName) -> Result<()> {
    tracing::debug!("Dropping table {} if it exists", table);
    tx.batch_execute(&format!("DROP TABLE IF EXISTS {}", table.quoted()))
        .await
        .context(format!("Failed to drop table '{}'", table))?;

    tracing::debug!("Creating table {}", table);
    tx.batch_execute(&create_table_sql(table))
        .await
        .context(format!("Failed to create table '{}'", table))?;

    Ok(())
}

/// Insert all data values in one statement, returning the number of rows written
pub async fn insert_rows(tx: &Transaction<'_>, table: &TableName, data: &[i32]) -> Result<u64> {
    if data.is_empty() {
        return Ok(0);
    }

    let statement = format!(
        "INSERT INTO {} (data) SELECT unnest($1::int4[])",
        table.quoted()
    );
    let inserted = tx
        .execute(statement.as_str(), &[&data])
        .await
        .context(format!(
            "Failed to insert {} rows into '{}'",
            data.len(),
            table
        ))?;

    Ok(inserted)
}
