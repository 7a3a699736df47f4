//! Wire types for the Hacker News API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric id the API assigns to every item.
pub type ItemId = u64;

/// A story, comment or job posting.
///
/// Only `id` is guaranteed. Comments carry no `title`, stories may carry no
/// `text`, and `dead`/`deleted` are omitted unless set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: ItemId,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    pub title: String,
    pub text: String,
    /// Creation time in unix seconds.
    pub time: i64,
    pub dead: bool,
    pub deleted: bool,
    pub kids: Vec<ItemId>,
}

impl Item {
    /// Creation time as a UTC timestamp.
    ///
    /// Out-of-range values collapse to the unix epoch.
    pub fn posted_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.time, 0).unwrap_or_default()
    }
}

/// A Hacker News account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    /// Submitted item ids, most recent first.
    pub submitted: Vec<ItemId>,
}
