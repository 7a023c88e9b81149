//! Error types for fetching the country directory.

use thiserror::Error;

/// Failure while loading the directory from the remote source.
///
/// `Transport` and `Status` are both transport-level failures; `Decode` means
/// the payload did not have the expected shape. All of them collapse into
/// `DirectoryState::Error` carrying the rendered message.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The request could not be sent or the body could not be read.
    #[error("network error: {0}")]
    Transport(String),

    /// The source answered with a non-success status.
    #[error("directory source returned HTTP {0}")]
    Status(u16),

    /// The payload was not a list of country records.
    #[error("unexpected response format: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for DirectoryError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Transport(e.to_string()),
        }
    }
}
