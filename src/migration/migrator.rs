// ABOUTME: Orchestrates the split of optional_loops into per-route tables
// ABOUTME: Checks the source, validates names, then rebuilds one table per route

use crate::migration::destination::{insert_rows, recreate_table};
use crate::migration::source::{data_for_name, distinct_names, source_table_exists, SOURCE_TABLE};
use crate::migration::table_name::{self, TableName};
use anyhow::{Context, Result};
use tokio_postgres::Client;

/// Row count written to one rebuilt table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub table: TableName,
    pub rows: u64,
}

/// Tables rebuilt by a completed run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub tables: Vec<TableReport>,
}

impl RunSummary {
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|report| report.rows).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `optional_loops` was not found; nothing was changed
    SourceMissing,
    Completed(RunSummary),
}

/// Rebuild one table per distinct route name in `optional_loops`
///
/// Every route name is validated before the first table is dropped. Each
/// table is dropped, recreated and filled inside its own transaction, so a
/// failure leaves earlier tables rebuilt and later ones untouched.
pub async fn run(client: &mut Client) -> Result<RunOutcome> {
    tracing::info!("Checking for '{}' table...", SOURCE_TABLE);
    if !source_table_exists(client).await? {
        tracing::info!("Table does not exist, terminating.");
        return Ok(RunOutcome::SourceMissing);
    }

    tracing::info!("Getting route data...");
    let names = distinct_names(client).await?;
    let tables = table_name::parse_all(&names)?;
    tracing::debug!("Found {} route names", tables.len());

    let mut summary = RunSummary::default();
    for table in tables {
        let rows = rebuild_table(client, &table).await?;
        tracing::info!("Rebuilt table \"{}\" with {} rows", table, rows);
        summary.tables.push(TableReport { table, rows });
    }

    Ok(RunOutcome::Completed(summary))
}

async fn rebuild_table(client: &mut Client, table: &TableName) -> Result<u64> {
    let data = data_for_name(client, table.as_str()).await?;

    let tx = client
        .transaction()
        .await
        .context(format!("Failed to start transaction for '{}'", table))?;
    recreate_table(&tx, table).await?;
    let rows = insert_rows(&tx, table, &data).await?;
    tx.commit()
        .await
        .context(format!("Failed to commit table '{}'", table))?;

    Ok(rows)
}
