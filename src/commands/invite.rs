//! Invite CLI commands.

use clap::{Args, Subcommand};

use crate::app::App;
use crate::output::{self, InviteRow, OutputFormat};
use invitehub_core::config::AppConfig;
use invitehub_core::error::AppError;
use invitehub_core::types::InviteId;
use invitehub_core::types::pagination::PageRequest;
use invitehub_entity::invite::{InviteAction, InviteRole};
use invitehub_entity::permission::{Capability, PermissionPatch, PermissionSet};
use invitehub_service::SendInviteRequest;

/// Arguments for invite commands
#[derive(Debug, Args)]
pub struct InviteArgs {
    /// Invite subcommand
    #[command(subcommand)]
    pub command: InviteCommand,
}

/// Invite subcommands
#[derive(Debug, Subcommand)]
pub enum InviteCommand {
    /// Send a new invite
    Send {
        /// Inviter email
        #[arg(long)]
        from: String,
        /// Invitee email
        #[arg(long)]
        to: String,
        /// Capability to grant (repeatable), e.g. `writePosts`
        #[arg(short = 'g', long = "grant")]
        grants: Vec<Capability>,
    },
    /// List invites given or received by a user
    List {
        /// User email
        email: String,
        /// Which side of the invite the user is on (`inviter`/`given` or `invitee`/`received`)
        #[arg(short, long, default_value = "invitee")]
        role: InviteRole,
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        /// Page size (defaults to `invites.default_page_size`)
        #[arg(long)]
        page_size: Option<u64>,
    },
    /// Show one invite
    Show {
        /// Invite ID
        id: InviteId,
    },
    /// Accept an invite
    Accept {
        /// Invite ID
        id: InviteId,
    },
    /// Reject an invite
    Reject {
        /// Invite ID
        id: InviteId,
    },
    /// Delete an invite (marks it rejected)
    Delete {
        /// Invite ID
        id: InviteId,
    },
    /// Flip one capability, applying the read/write rules
    Toggle {
        /// Invite ID
        id: InviteId,
        /// Capability to flip
        capability: Capability,
    },
    /// Set several capabilities at once
    Permissions {
        /// Invite ID
        id: InviteId,
        /// `capability=true|false` (repeatable)
        #[arg(short = 's', long = "set", value_parser = parse_assignment, required = true)]
        assignments: Vec<(Capability, bool)>,
    },
}

/// Parse `readPosts=true` into a capability assignment.
fn parse_assignment(raw: &str) -> Result<(Capability, bool), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected capability=true|false, got '{raw}'"))?;
    let capability: Capability = key.trim().parse().map_err(|e: AppError| e.message)?;
    let value: bool = value
        .trim()
        .parse()
        .map_err(|_| format!("expected true or false, got '{value}'"))?;
    Ok((capability, value))
}

/// Execute invite commands
pub async fn execute(
    args: &InviteArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let app = App::load(config).await?;
    let service = &app.invite_service;

    let changed = match &args.command {
        InviteCommand::Send { from, to, grants } => {
            let mut permissions = PermissionSet::default();
            for capability in grants {
                permissions.set(*capability, true);
            }
            let invite = service
                .create(SendInviteRequest::new(from.as_str(), to.as_str(), permissions))
                .await?;
            output::print_success(&format!("Invite {} sent to {}", invite.id, invite.invitee.email));
            output::print_invite(&invite, format);
            true
        }
        InviteCommand::List {
            email,
            role,
            page,
            page_size,
        } => {
            let request = PageRequest {
                page: *page,
                page_size: page_size.unwrap_or_else(|| app.default_page_size()),
            };
            let result = service.list_for(email, *role, &request).await?;
            output::print_list::<_, InviteRow>(&result.items, format);
            if format == output::OutputFormat::Table {
                output::print_kv(
                    "Page",
                    &format!("{} of {} ({} total)", result.page, result.total_pages, result.total_items),
                );
            }
            false
        }
        InviteCommand::Show { id } => {
            let invite = service.get(id).await?;
            output::print_invite(&invite, format);
            false
        }
        InviteCommand::Accept { id } => {
            let invite = service.transition(id, InviteAction::Accept).await?;
            output::print_invite(&invite, format);
            true
        }
        InviteCommand::Reject { id } => {
            let invite = service.transition(id, InviteAction::Reject).await?;
            output::print_invite(&invite, format);
            true
        }
        InviteCommand::Delete { id } => {
            let invite = service.delete(id).await?;
            output::print_success(&format!("Invite {} deleted", invite.id));
            true
        }
        InviteCommand::Toggle { id, capability } => {
            let invite = service.toggle_permission(id, *capability).await?;
            output::print_invite(&invite, format);
            true
        }
        InviteCommand::Permissions { id, assignments } => {
            let patch = assignments
                .iter()
                .fold(PermissionPatch::default(), |patch, (cap, value)| {
                    patch.with(*cap, *value)
                });
            let invite = service.update_permissions(id, patch).await?;
            output::print_invite(&invite, format);
            true
        }
    };

    if changed {
        app.persist().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("writePosts=true").unwrap(),
            (Capability::WritePosts, true)
        );
        assert_eq!(
            parse_assignment("read_profile = false").unwrap(),
            (Capability::ReadProfile, false)
        );
        assert!(parse_assignment("writePosts").is_err());
        assert!(parse_assignment("writePosts=maybe").is_err());
        assert!(parse_assignment("deletePosts=true").is_err());
    }
}
