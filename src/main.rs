//! Schema bootstrap for `SplitLedger`.
//!
//! Connects to the configured database and ensures every ledger table and
//! index exists. Run this once before pointing a request layer at the store.

use dotenvy::dotenv;
use splitledger::config::database;
use splitledger::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Connect and ensure the schema exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create ledger tables: {e}"))?;

    info!(url = %database::get_database_url(), "ledger schema ready");
    Ok(())
}
