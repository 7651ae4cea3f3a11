//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Every section has defaults, so a missing file yields a
//! usable configuration.

pub mod invites;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::invites::{InviteConfig, TransitionMode};
pub use self::logging::LoggingConfig;
pub use self::store::StoreConfig;

use crate::error::{AppError, ErrorKind};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Snapshot store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Invite settings.
    #[serde(default)]
    pub invites: InviteConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the file at `path` with a `config/{env}` overlay and
    /// environment variables prefixed with `INVITEHUB__`.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("INVITEHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    pub fn validate(&self) -> Result<(), AppError> {
        self.invites.validate().map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid invites settings: {e}"),
                e,
            )
        })
    }
}
