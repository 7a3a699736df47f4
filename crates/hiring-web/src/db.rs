//! SQLite database for imported stories and jobs.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use hiring_hn::ItemId;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{Connection, OptionalExtension, Row, ToSql, params};
use tracing::info;

use crate::model::{Job, JobStatus, NewJob, Story};
use crate::store::{JobStore, StoreError, StoryStore};

const JOB_COLUMNS: &str = "id, hn_id, story_id, text, posted_at, status";

/// SQLite-backed store for the hiring index.
pub struct HiringDb {
    conn: Mutex<Connection>,
}

impl HiringDb {
    /// Open or create the SQLite database.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;

        // WAL lets page reads proceed while a sync writes
        conn.execute_batch(
            "PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL; PRAGMA foreign_keys=ON;",
        )?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS hiring_stories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                hn_id INTEGER NOT NULL UNIQUE,
                title TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                indexed_at TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE TABLE IF NOT EXISTS hiring_jobs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                hn_id INTEGER NOT NULL UNIQUE,
                story_id INTEGER NOT NULL REFERENCES hiring_stories(id),
                text TEXT NOT NULL,
                posted_at INTEGER NOT NULL,
                status TEXT NOT NULL CHECK (status IN ('active', 'dead', 'deleted')),
                indexed_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            CREATE INDEX IF NOT EXISTS idx_jobs_story ON hiring_jobs(story_id, hn_id);
            ",
        )?;

        info!(path = %path, "hiring database initialized");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Number of jobs stored for a story.
    pub fn job_count(&self, story_id: i64) -> Result<usize, StoreError> {
        let conn = self.conn()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM hiring_jobs WHERE story_id = ?1",
            params![story_id],
            |row| row.get::<_, usize>(0),
        )?;
        Ok(count)
    }

    fn job_where(
        &self,
        clause: &str,
        story_id: i64,
        cursor: i64,
    ) -> Result<Option<Job>, StoreError> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT {} FROM hiring_jobs WHERE story_id = ?1 AND {} LIMIT 1",
            JOB_COLUMNS, clause
        );
        let job = conn
            .query_row(&sql, params![story_id, cursor], job_from_row)
            .optional()?;
        Ok(job)
    }
}

impl StoryStore for HiringDb {
    fn latest(&self) -> Result<Option<Story>, StoreError> {
        let conn = self.conn()?;
        let story = conn
            .query_row(
                "SELECT id, hn_id, title, created_at FROM hiring_stories ORDER BY id DESC LIMIT 1",
                [],
                |row| {
                    Ok(Story {
                        id: row.get(0)?,
                        hn_id: row.get(1)?,
                        title: row.get(2)?,
                        created_at: from_unix(row.get(3)?),
                    })
                },
            )
            .optional()?;
        Ok(story)
    }

    fn create_story(
        &self,
        hn_id: ItemId,
        title: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Story, StoreError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO hiring_stories (hn_id, title, created_at) VALUES (?1, ?2, ?3)",
            params![hn_id, title, created_at.timestamp()],
        )?;

        Ok(Story {
            id: conn.last_insert_rowid(),
            hn_id,
            title: title.to_string(),
            created_at,
        })
    }
}

impl JobStore for HiringDb {
    fn existing_ids(&self, story_id: i64) -> Result<HashSet<ItemId>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT hn_id FROM hiring_jobs WHERE story_id = ?1")?;
        let ids = stmt
            .query_map(params![story_id], |row| row.get::<_, ItemId>(0))?
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(ids)
    }

    fn create_job(&self, job: NewJob<'_>) -> Result<Job, StoreError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO hiring_jobs (hn_id, story_id, text, posted_at, status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                job.hn_id,
                job.story_id,
                job.text,
                job.posted_at.timestamp(),
                job.status,
            ],
        )?;

        Ok(Job {
            id: conn.last_insert_rowid(),
            hn_id: job.hn_id,
            story_id: job.story_id,
            text: job.text.to_string(),
            posted_at: job.posted_at,
            status: job.status,
        })
    }

    // SQLite integers are signed, so no stored id exceeds i64::MAX
    fn after(&self, story_id: i64, cursor: ItemId) -> Result<Option<Job>, StoreError> {
        match i64::try_from(cursor) {
            Ok(cursor) => self.job_where("hn_id > ?2 ORDER BY hn_id ASC", story_id, cursor),
            Err(_) => Ok(None),
        }
    }

    fn before(&self, story_id: i64, cursor: ItemId) -> Result<Option<Job>, StoreError> {
        match i64::try_from(cursor) {
            Ok(cursor) => self.job_where("hn_id < ?2 ORDER BY hn_id DESC", story_id, cursor),
            Err(_) => self.job_where("hn_id <= ?2 ORDER BY hn_id DESC", story_id, i64::MAX),
        }
    }
}

fn job_from_row(row: &Row<'_>) -> rusqlite::Result<Job> {
    Ok(Job {
        id: row.get(0)?,
        hn_id: row.get(1)?,
        story_id: row.get(2)?,
        text: row.get(3)?,
        posted_at: from_unix(row.get(4)?),
        status: row.get(5)?,
    })
}

fn from_unix(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

impl ToSql for JobStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for JobStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse::<JobStatus>()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
