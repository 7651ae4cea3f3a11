//! Sign-in CLI commands.

use clap::{Args, Subcommand};

use crate::app::App;
use crate::output::{self, OutputFormat, UserRow};
use invitehub_core::config::AppConfig;
use invitehub_core::error::AppError;
use invitehub_entity::user::UserSummary;

/// Arguments for auth commands
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Auth subcommand
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Check credentials and eligibility
    Login {
        /// Email
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Report whether a user may sign in, ignoring credentials
    Eligible {
        /// Email
        email: String,
    },
}

/// Execute auth commands
pub async fn execute(
    args: &AuthArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let app = App::load(config).await?;

    match &args.command {
        AuthCommand::Login { email, password } => {
            let user = app.auth_service.login(email, password).await?;
            match format {
                OutputFormat::Table => {
                    output::print_success(&format!("Signed in as {}", user.username));
                    output::print_list::<UserSummary, UserRow>(std::slice::from_ref(&user), format);
                }
                OutputFormat::Json => output::print_json(&user),
            }
        }
        AuthCommand::Eligible { email } => {
            let eligible = app.auth_service.is_eligible(email).await?;
            match format {
                OutputFormat::Table => {
                    output::print_kv("Email", email);
                    output::print_kv("Eligible", if eligible { "yes" } else { "no" });
                }
                OutputFormat::Json => {
                    output::print_json(&serde_json::json!({ "email": email, "eligible": eligible }))
                }
            }
        }
    }
    Ok(())
}
