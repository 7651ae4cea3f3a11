//! User CLI commands.

use clap::{Args, Subcommand};

use crate::app::App;
use crate::output::{self, OutputFormat, UserRow};
use invitehub_auth::{Argon2Hasher, PasswordHasher};
use invitehub_core::config::AppConfig;
use invitehub_core::error::AppError;
use invitehub_entity::user::UserSummary;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Search users by email or username
    Search {
        /// Case-insensitive substring; empty lists everyone
        #[arg(default_value = "")]
        query: String,
    },
    /// Hash a password for the `password` field of a user snapshot
    HashPassword {
        /// Plain-text password
        password: String,
    },
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        UserCommand::Search { query } => {
            let app = App::load(config).await?;
            let users = app.user_service.search(query).await?;
            output::print_list::<UserSummary, UserRow>(&users, format);
        }
        UserCommand::HashPassword { password } => {
            let hash = Argon2Hasher::new().hash(password)?;
            println!("{hash}");
        }
    }
    Ok(())
}
