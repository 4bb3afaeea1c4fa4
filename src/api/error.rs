//! Error type for calls against the remote inventory API.

use thiserror::Error;

/// Any failure talking to the product API.
///
/// Carries the HTTP status and response body when the server answered with
/// a status the operation does not accept.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection, TLS, timeout or body transfer failure
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a status the operation does not accept
    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the JSON the operation expects
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Collection URL could not be used to build a request
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl NetworkError {
    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::Status { status, .. } => Some(*status),
            NetworkError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Short error kind string for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            NetworkError::Transport { .. } => "transport",
            NetworkError::Status { .. } => "status",
            NetworkError::Decode(_) => "decode",
            NetworkError::InvalidUrl { .. } => "invalid_url",
        }
    }
}
