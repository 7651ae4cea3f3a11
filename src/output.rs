//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use invitehub_entity::invite::Invite;
use invitehub_entity::user::UserSummary;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Invite display row for table output
#[derive(Debug, Serialize, Tabled)]
pub struct InviteRow {
    /// Invite ID
    id: String,
    /// Inviter email
    inviter: String,
    /// Invitee email
    invitee: String,
    /// Status
    status: String,
    /// Granted capabilities
    permissions: String,
    /// Created at
    created_at: String,
}

impl From<&Invite> for InviteRow {
    fn from(invite: &Invite) -> Self {
        let granted: Vec<&str> = invite
            .permissions
            .granted()
            .iter()
            .map(|cap| cap.as_str())
            .collect();
        Self {
            id: invite.id.to_string(),
            inviter: invite.inviter.email.clone(),
            invitee: invite.invitee.email.clone(),
            status: invite.status.to_string(),
            permissions: if granted.is_empty() {
                "-".to_string()
            } else {
                granted.join(", ")
            },
            created_at: invite.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
pub struct UserRow {
    /// User ID
    id: String,
    /// Username
    username: String,
    /// Email
    email: String,
    /// Verified flag
    verified: String,
}

impl From<&UserSummary> for UserRow {
    fn from(user: &UserSummary) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            verified: if user.is_verified { "yes" } else { "no" }.to_string(),
        }
    }
}

/// Print a list of rows in table form, or the raw items as JSON.
pub fn print_list<T, R>(items: &[T], format: OutputFormat)
where
    T: Serialize,
    R: Tabled + for<'a> From<&'a T>,
{
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let rows: Vec<R> = items.iter().map(R::from).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single invite in the selected format
pub fn print_invite(invite: &Invite, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new([InviteRow::from(invite)])),
        OutputFormat::Json => print_json(invite),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
