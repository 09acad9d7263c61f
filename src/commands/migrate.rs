// ABOUTME: End-to-end route table migration command
// ABOUTME: Connects with DB_* settings, runs the migrator, and reports the result

use crate::config::DbConfig;
use crate::migration::{self, RunOutcome};
use crate::postgres;
use anyhow::{Context, Result};

pub async fn migrate(config: &DbConfig) -> Result<RunOutcome> {
    let missing = config.missing_variables();
    if !missing.is_empty() {
        tracing::warn!(
            "⚠ Environment variables not set: {}. Connection will likely fail.",
            missing.join(", ")
        );
    }

    tracing::debug!("Connecting with {:?}", config);
    let mut client = postgres::connect_with_config(&config.to_pg_config())
        .await
        .context("Failed to connect to database")?;

    // The client is dropped on every path out of this function, closing the session
    let outcome = migration::run(&mut client).await?;

    if let RunOutcome::Completed(summary) = &outcome {
        tracing::info!(
            "Rebuilt {} tables with {} rows in total",
            summary.tables.len(),
            summary.total_rows()
        );
        tracing::info!("Script complete");
    }

    Ok(outcome)
}
