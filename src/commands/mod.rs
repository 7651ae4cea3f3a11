//! CLI command definitions and dispatch.

pub mod auth;
pub mod invite;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use invitehub_core::config::AppConfig;
use invitehub_core::error::AppError;

/// InviteHub invite and sign-in administration
#[derive(Debug, Parser)]
#[command(name = "invitehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay to merge from `config/<env>.toml`
    #[arg(short, long, env = "INVITEHUB_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Invite management
    Invite(invite::InviteArgs),
    /// User lookup
    User(user::UserArgs),
    /// Sign-in checks
    Auth(auth::AuthArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Invite(args) => invite::execute(args, config, self.format).await,
            Commands::User(args) => user::execute(args, config, self.format).await,
            Commands::Auth(args) => auth::execute(args, config, self.format).await,
        }
    }
}
