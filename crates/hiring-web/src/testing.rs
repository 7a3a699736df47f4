//! Shared test fixtures.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use hiring_hn::{HnError, Item, ItemId, ItemSource};
use tempfile::TempDir;

use crate::db::HiringDb;

/// Open a fresh on-disk database. Keep the `TempDir` alive for the test.
pub fn open_db() -> (TempDir, HiringDb) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hiring.db");
    let db = HiringDb::open(path.to_str().unwrap()).unwrap();
    (dir, db)
}

/// In-memory item source that records which items were fetched.
#[derive(Default)]
pub struct FakeSource {
    items: HashMap<ItemId, Item>,
    submissions: HashMap<String, Vec<ItemId>>,
    fetched: Mutex<Vec<ItemId>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.id, item);
        self
    }

    pub fn with_story(self, id: ItemId, title: &str) -> Self {
        self.with_item(Item {
            id,
            kind: Some("story".to_string()),
            title: title.to_string(),
            time: 1_725_206_400,
            ..Default::default()
        })
    }

    pub fn with_kids(mut self, id: ItemId, kids: &[ItemId]) -> Self {
        self.items.entry(id).or_default().kids = kids.to_vec();
        self
    }

    pub fn with_comment(self, id: ItemId, text: &str, dead: bool, deleted: bool) -> Self {
        self.with_item(Item {
            id,
            kind: Some("comment".to_string()),
            text: text.to_string(),
            time: 1_725_210_000 + id as i64 % 1000,
            dead,
            deleted,
            ..Default::default()
        })
    }

    pub fn with_submissions(mut self, account: &str, ids: &[ItemId]) -> Self {
        self.submissions.insert(account.to_string(), ids.to_vec());
        self
    }

    /// Item ids requested so far, in order.
    pub fn fetched(&self) -> Vec<ItemId> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ItemSource for FakeSource {
    async fn get_item(&self, id: ItemId) -> Result<Item, HnError> {
        self.fetched.lock().unwrap().push(id);
        self.items.get(&id).cloned().ok_or_else(|| HnError::NotFound {
            kind: "item",
            id: id.to_string(),
        })
    }

    async fn get_submissions(&self, account: &str) -> Result<Vec<ItemId>, HnError> {
        self.submissions
            .get(account)
            .cloned()
            .ok_or_else(|| HnError::NotFound {
                kind: "user",
                id: account.to_string(),
            })
    }
}
