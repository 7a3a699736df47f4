//! Picks the hiring thread to import, creating a record on rollover.

use hiring_hn::{ItemId, ItemSource};
use tracing::{debug, info};

use crate::error::HiringError;
use crate::model::Story;
use crate::store::StoryStore;

/// Titles of the monthly hiring threads start with this.
pub const HIRING_TITLE_PREFIX: &str = "Ask HN: Who is hiring?";

/// The current thread is always among this many most recent submissions.
pub const CANDIDATE_COUNT: usize = 3;

/// Decides which story is current.
pub struct StoryResolver<'a> {
    source: &'a dyn ItemSource,
    stories: &'a dyn StoryStore,
}

impl<'a> StoryResolver<'a> {
    pub fn new(source: &'a dyn ItemSource, stories: &'a dyn StoryStore) -> Self {
        Self { source, stories }
    }

    /// Resolve the current story from an account's submissions, most recent first.
    ///
    /// The stored latest story is reused while it is still among the first
    /// [`CANDIDATE_COUNT`] submissions. Otherwise the candidates are fetched in
    /// order and the first whose title starts with [`HIRING_TITLE_PREFIX`] is
    /// stored and returned.
    pub async fn resolve(&self, submissions: &[ItemId]) -> Result<Story, HiringError> {
        let candidates = &submissions[..submissions.len().min(CANDIDATE_COUNT)];

        match self.stories.latest()? {
            Some(story) if candidates.contains(&story.hn_id) => {
                debug!(hn_id = story.hn_id, "stored hiring story is current");
                return Ok(story);
            }
            Some(story) => {
                info!(
                    hn_id = story.hn_id,
                    candidates = ?candidates,
                    "stored hiring story not among recent submissions, will update"
                );
            }
            None => info!("hiring story not found in db"),
        }

        for &candidate in candidates {
            let item = self.source.get_item(candidate).await?;
            if !item.title.starts_with(HIRING_TITLE_PREFIX) {
                debug!(hn_id = candidate, title = %item.title, "not a hiring story");
                continue;
            }

            let story = self
                .stories
                .create_story(candidate, &item.title, item.posted_at())?;
            info!(hn_id = story.hn_id, title = %story.title, "added new hiring story");
            return Ok(story);
        }

        Err(HiringError::ResolutionFailed {
            candidates: candidates.to_vec(),
        })
    }
}
