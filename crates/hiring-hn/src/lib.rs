//! Hacker News client for the who-is-hiring importer.
//!
//! This crate wraps the public Firebase-backed Hacker News API:
//!
//! - **Items**: stories and comments by numeric id (`/item/{id}.json`)
//! - **Users**: an account's submissions, most recent first (`/user/{name}.json`)
//!
//! The [`ItemSource`] trait is the seam the importer depends on, so the
//! ingestion logic can run against an in-memory source in tests.

mod client;
mod error;
mod types;

pub use client::{HnClient, ItemSource};
pub use error::HnError;
pub use types::*;

/// Base URL of the public Hacker News API.
pub const DEFAULT_API_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Account that posts the monthly hiring threads.
pub const WHO_IS_HIRING_ACCOUNT: &str = "whoishiring";
