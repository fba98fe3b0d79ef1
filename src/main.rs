//! harvest - connection check for the Harvest API
//!
//! Verifies that the configured token and account id work, then prints the
//! company and the authenticated user as JSON on stdout.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `HARVEST_ACCOUNT_ID`: numeric Harvest account id
//! - `HARVEST_ACCESS_TOKEN`: personal access token
//!
//! # Usage
//!
//! ```bash
//! HARVEST_ACCOUNT_ID=1234567 HARVEST_ACCESS_TOKEN=xxx ./harvest
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use harvest::{config, harvest_client};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the JSON output
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("harvest=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("harvest v{}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::from_env().context("Failed to load configuration")?;

    tracing::debug!("Configuration loaded, base_url: {}", config.base_url);

    let client =
        harvest_client::HarvestClient::new(&config).context("Failed to create Harvest client")?;

    tracing::info!("Testing connection to Harvest...");
    let company = client
        .test_connection()
        .await
        .context("Could not connect to Harvest")?;

    let user = client
        .get_currently_authenticated_user()
        .await
        .context("Failed to fetch the authenticated user")?;

    tracing::info!(user_id = user.id, "Authenticated as {}", user.full_name());

    let output = serde_json::json!({
        "company": company,
        "user": user,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to render output")?
    );

    Ok(())
}
