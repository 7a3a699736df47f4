//! Storage contracts for stories and jobs.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use hiring_hn::ItemId;
use thiserror::Error;

use crate::model::{Job, NewJob, Story};

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite failure, including uniqueness violations.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A previous holder of the connection panicked.
    #[error("database connection lock poisoned")]
    Poisoned,
}

/// Persistence for hiring threads.
pub trait StoryStore: Send + Sync {
    /// The most recently created story, if any.
    fn latest(&self) -> Result<Option<Story>, StoreError>;

    /// Insert a story. Fails if `hn_id` is already stored.
    fn create_story(
        &self,
        hn_id: ItemId,
        title: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Story, StoreError>;
}

/// Persistence for postings and the cursor lookups over them.
pub trait JobStore: Send + Sync {
    /// External ids of every job stored for a story.
    fn existing_ids(&self, story_id: i64) -> Result<HashSet<ItemId>, StoreError>;

    /// Insert a job. Fails if `hn_id` is already stored under any story.
    fn create_job(&self, job: NewJob<'_>) -> Result<Job, StoreError>;

    /// The story's job with the smallest external id greater than `cursor`.
    fn after(&self, story_id: i64, cursor: ItemId) -> Result<Option<Job>, StoreError>;

    /// The story's job with the largest external id less than `cursor`.
    fn before(&self, story_id: i64, cursor: ItemId) -> Result<Option<Job>, StoreError>;
}
