//! Incremental import of a hiring thread's top-level postings.

use hiring_hn::ItemSource;
use tracing::info;

use crate::error::HiringError;
use crate::model::{JobStatus, NewJob, Story};
use crate::store::JobStore;

/// Outcome of one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Children listed on the story.
    pub listed: usize,
    /// Children already stored before the run.
    pub skipped: usize,
    /// Jobs inserted by the run.
    pub added: usize,
}

/// Brings a story's stored jobs up to date with its child list.
pub struct JobIngester<'a> {
    source: &'a dyn ItemSource,
    jobs: &'a dyn JobStore,
}

impl<'a> JobIngester<'a> {
    pub fn new(source: &'a dyn ItemSource, jobs: &'a dyn JobStore) -> Self {
        Self { source, jobs }
    }

    /// Import every child of `story` that is not stored yet, in the order the
    /// API lists them.
    ///
    /// The first failed fetch or insert ends the run with that error. Jobs
    /// inserted before the failure stay; running again picks up the rest.
    pub async fn ingest(&self, story: &Story) -> Result<IngestReport, HiringError> {
        info!(hn_id = story.hn_id, "process jobs for hiring story");

        let kids = self.source.get_item(story.hn_id).await?.kids;
        let saved = self.jobs.existing_ids(story.id)?;

        let mut report = IngestReport {
            listed: kids.len(),
            ..Default::default()
        };

        for kid in kids {
            if saved.contains(&kid) {
                report.skipped += 1;
                continue;
            }

            let item = self.source.get_item(kid).await?;
            let job = self.jobs.create_job(NewJob {
                hn_id: kid,
                story_id: story.id,
                text: &item.text,
                posted_at: item.posted_at(),
                status: JobStatus::from_flags(item.dead, item.deleted),
            })?;

            info!(hn_id = job.hn_id, status = %job.status, "added new hiring job");
            report.added += 1;
        }

        info!(
            hn_id = story.hn_id,
            listed = report.listed,
            skipped = report.skipped,
            added = report.added,
            "hiring jobs up to date"
        );

        Ok(report)
    }
}
