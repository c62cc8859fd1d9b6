use std::path::Path;

use serde::Deserialize;

use crate::error::{config::ConfigError, AppError};

/// Application configuration, loaded once at startup from `config.json`.
///
/// Immutable after load; constructed before anything connects to Discord
/// and passed by reference into the components that need it.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL of the Haven API, without a trailing slash.
    #[serde(default)]
    pub haven_api_base_url: String,

    /// Bearer token for authenticating to the Haven API.
    #[serde(default)]
    pub haven_api_token: String,

    /// Discord bot token used to connect to the gateway.
    #[serde(default)]
    pub discord_bot_token: String,
}

impl Config {
    /// Reads and validates the configuration file.
    ///
    /// Every field is required and must be non-empty. A field that is absent
    /// from the file deserializes to an empty string and is rejected by the
    /// same check, so missing and empty fields produce the same diagnostic.
    ///
    /// # Returns
    /// - `Ok(Config)` - Validated configuration
    /// - `Err(AppError)` - File unreadable, JSON invalid, or a field missing/empty
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_json::from_str(&raw).map_err(ConfigError::Parse)?;
        config.validate()?;

        Ok(config)
    }

    /// Checks each required field by name.
    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("haven_api_base_url", &self.haven_api_base_url),
            ("haven_api_token", &self.haven_api_token),
            ("discord_bot_token", &self.discord_bot_token),
        ];

        for (key, value) in required {
            if value.is_empty() {
                return Err(ConfigError::MissingField(key));
            }
        }

        Ok(())
    }
}
