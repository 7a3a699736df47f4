//! One-job-at-a-time traversal of a story's postings.

use hiring_hn::ItemId;

use crate::error::HiringError;
use crate::model::{Job, Story};
use crate::store::JobStore;

/// Position relative to which the next job is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Smallest id strictly greater than this. `After(0)` is the first job.
    After(ItemId),
    /// Largest id strictly less than this.
    Before(ItemId),
}

impl Cursor {
    /// Build a cursor from raw `after`/`before` query values.
    ///
    /// A positive `before` wins; otherwise `after` is used. Missing or
    /// malformed values count as zero.
    pub fn from_params(after: Option<&str>, before: Option<&str>) -> Self {
        match param_value(before) {
            0 => Self::After(param_value(after)),
            before => Self::Before(before),
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::After(0)
    }
}

fn param_value(raw: Option<&str>) -> ItemId {
    raw.and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// Select the job of `story` that `cursor` points at.
pub fn select_job(jobs: &dyn JobStore, story: &Story, cursor: Cursor) -> Result<Job, HiringError> {
    let job = match cursor {
        Cursor::After(after) => jobs.after(story.id, after)?,
        Cursor::Before(before) => jobs.before(story.id, before)?,
    };

    job.ok_or_else(|| HiringError::NotFound(format!("job for cursor {:?}", cursor)))
}
