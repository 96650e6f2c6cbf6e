//! User command handlers
//!
//! Handles listing users, either as formatted records or as the raw payload.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use roster_client::{UserDirectory, UsersResponse};
use roster_core::domain::user::User;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    List,
    /// Print the raw `/users` payload as JSON
    Raw,
}

/// Handle user commands
///
/// Routes user subcommands to their respective handlers.
pub async fn handle_user_command(command: UserCommands, directory: &dyn UserDirectory) -> Result<()> {
    match command {
        UserCommands::List => list_users(directory).await,
        UserCommands::Raw => print_raw(directory).await,
    }
}

/// List all users
async fn list_users(directory: &dyn UserDirectory) -> Result<()> {
    let users = directory
        .list_users()
        .await
        .context("Failed to fetch users")?;

    print!("{}", render_users(&users));
    Ok(())
}

/// Print the untouched payload
async fn print_raw(directory: &dyn UserDirectory) -> Result<()> {
    let payload = directory
        .fetch_users()
        .await
        .context("Failed to fetch users")?;

    println!("{}", render_raw(&payload)?);
    Ok(())
}

/// Format the user listing
fn render_users(users: &[User]) -> String {
    if users.is_empty() {
        return format!("{}\n", "No users found.".yellow());
    }

    let mut out = format!("{}\n\n", format!("Found {} user(s):", users.len()).bold());
    for user in users {
        out.push_str(&render_user_summary(user));
    }
    out
}

/// Format a user summary
fn render_user_summary(user: &User) -> String {
    format!(
        "  {} {}\n    Email:        {}\n\n",
        "▸".cyan(),
        user_heading(user).bold(),
        user.email.dimmed()
    )
}

fn user_heading(user: &User) -> String {
    format!("User {} (#{})", user.username, user.id)
}

/// Pretty-print the payload as JSON
fn render_raw(payload: &UsersResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}
