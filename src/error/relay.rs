use thiserror::Error;

/// Failure modes of one outbound role-update delivery.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The request could not be encoded to JSON.
    ///
    /// Should not occur for well-formed payloads; treated as a programming
    /// error and propagated like a transport failure.
    #[error("Failed to encode role update request: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The connection could not be established or was interrupted.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The Haven API answered with a status other than 200.
    ///
    /// All non-200 statuses are treated uniformly; there is no
    /// status-specific handling and no retry.
    #[error("Haven API rejected role update: {status}")]
    Api { status: reqwest::StatusCode },
}
