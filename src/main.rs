// ABOUTME: Entry point for route-tables
// ABOUTME: Loads settings from the environment and runs the migration once

use route_tables::commands;
use route_tables::config::DbConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file is optional; variables already set in the environment win
    let dotenv_path = dotenvy::dotenv().ok();

    // Initialize logging - default to INFO level if RUST_LOG not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let config = DbConfig::from_env();
    commands::migrate(&config).await?;

    Ok(())
}
