//! Stories and jobs as stored locally.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use hiring_hn::ItemId;
use thiserror::Error;

/// A monthly hiring thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// Local row id.
    pub id: i64,
    pub hn_id: ItemId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A top-level posting under a hiring thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Local row id.
    pub id: i64,
    pub hn_id: ItemId,
    /// Local row id of the owning story.
    pub story_id: i64,
    /// Body HTML as returned by the API.
    pub text: String,
    pub posted_at: DateTime<Utc>,
    pub status: JobStatus,
}

/// A job about to be inserted.
#[derive(Debug, Clone, Copy)]
pub struct NewJob<'a> {
    pub hn_id: ItemId,
    pub story_id: i64,
    pub text: &'a str,
    pub posted_at: DateTime<Utc>,
    pub status: JobStatus,
}

/// Visibility of a posting at the moment it was imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Active,
    Dead,
    Deleted,
}

impl JobStatus {
    /// Derive a status from the API's flags. `deleted` wins over `dead`.
    pub fn from_flags(dead: bool, deleted: bool) -> Self {
        if deleted {
            Self::Deleted
        } else if dead {
            Self::Dead
        } else {
            Self::Active
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Dead => "dead",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string that is not one of `active`, `dead` or `deleted`.
#[derive(Debug, Error)]
#[error("unknown job status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for JobStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "dead" => Ok(Self::Dead),
            "deleted" => Ok(Self::Deleted),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
