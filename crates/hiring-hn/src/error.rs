//! Error types for the Hacker News client.

use thiserror::Error;

/// Errors that can occur when talking to the Hacker News API.
#[derive(Debug, Error)]
pub enum HnError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered `null` for the requested resource.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Non-success status from the API.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
