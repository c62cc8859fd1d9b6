use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON.
    #[error("Failed to parse config file: {0}")]
    Parse(#[source] serde_json::Error),

    /// Required field is absent or empty.
    ///
    /// Carries the JSON key of the offending field. Check `config.json`
    /// against `config.json.example` for the required keys.
    #[error("Missing required config field: {0}")]
    MissingField(&'static str),
}
