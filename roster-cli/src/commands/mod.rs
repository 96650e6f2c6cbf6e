//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod status;
mod users;

pub use users::UserCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// User listing
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Check that the API is reachable
    Status,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        Commands::Users { command } => users::handle_user_command(command, &client).await,
        Commands::Status => status::show_status(&client).await,
    }
}
