//! Status command handler

use anyhow::{Context, Result};
use colored::*;
use roster_client::UserApiClient;

/// Print the backend root message
pub async fn show_status(client: &UserApiClient) -> Result<()> {
    let status = client
        .api_status()
        .await
        .with_context(|| format!("API at {} is not reachable", client.config().root_url()))?;

    println!("{} {}", "✓".green(), status.message);
    Ok(())
}
