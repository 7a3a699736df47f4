//! Error types for syncing and serving hiring threads.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hiring_hn::{HnError, ItemId};
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Errors that can occur while syncing or serving.
#[derive(Debug, Error)]
pub enum HiringError {
    /// Fetching or decoding a Hacker News document failed.
    #[error("remote fetch failed: {0}")]
    RemoteFetchFailed(#[from] HnError),

    /// None of the candidate submissions is a hiring thread.
    #[error("no hiring story among submissions {candidates:?}")]
    ResolutionFailed { candidates: Vec<ItemId> },

    /// The local store rejected a read or write.
    #[error("persistence failed: {0}")]
    PersistenceFailed(#[from] StoreError),

    /// Nothing to show for the request.
    #[error("{0} not found")]
    NotFound(String),
}

impl IntoResponse for HiringError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
