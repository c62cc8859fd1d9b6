//! Error types for the relay.
//!
//! `AppError` is the top-level error type returned from startup and the
//! startup role sync. Per-concern errors live in their own modules and
//! convert into `AppError` with `#[from]`.

pub mod config;
pub mod relay;

use thiserror::Error;

use crate::error::{config::ConfigError, relay::RelayError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Always fatal; the process does not connect to Discord without a
    /// complete configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure delivering a role update to the Haven API.
    ///
    /// Fatal during the startup sync; logged and swallowed for live events.
    #[error(transparent)]
    RelayErr(#[from] RelayError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as
/// serenity::Error is very large and would make all AppError variants
/// larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
