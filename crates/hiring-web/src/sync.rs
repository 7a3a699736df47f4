//! Startup sync: resolve the current thread, then import its jobs.

use hiring_hn::ItemSource;
use tracing::info;

use crate::db::HiringDb;
use crate::error::HiringError;
use crate::ingest::JobIngester;
use crate::model::Story;
use crate::resolver::StoryResolver;

/// Fetch the account's submissions, resolve the current story and import
/// its new jobs. Returns the story that was synced.
pub async fn sync_data(
    source: &dyn ItemSource,
    db: &HiringDb,
    account: &str,
) -> Result<Story, HiringError> {
    info!(account = %account, "starting data sync");

    let submissions = source.get_submissions(account).await?;
    let story = StoryResolver::new(source, db).resolve(&submissions).await?;
    JobIngester::new(source, db).ingest(&story).await?;

    info!(hn_id = story.hn_id, title = %story.title, "data sync complete");
    Ok(story)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobStatus;
    use crate::store::{JobStore, StoryStore};
    use crate::testing::{FakeSource, open_db};
    use hiring_hn::HnClient;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_sync_against_api() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/user/whoishiring.json",
            serde_json::json!({
                "id": "whoishiring",
                "submitted": [41000001, 41000002, 41000003, 40000000]
            }),
        )
        .await;
        mount_json(
            &server,
            "/item/41000001.json",
            serde_json::json!({
                "id": 41000001,
                "title": "Ask HN: Who wants to be hired? (September 2024)",
                "time": 1_725_206_400,
                "type": "story"
            }),
        )
        .await;
        mount_json(
            &server,
            "/item/41000002.json",
            serde_json::json!({
                "id": 41000002,
                "title": "Ask HN: Who is hiring? (September 2024)",
                "time": 1_725_206_400,
                "kids": [41000011, 41000010],
                "type": "story"
            }),
        )
        .await;
        mount_json(
            &server,
            "/item/41000003.json",
            serde_json::json!({
                "id": 41000003,
                "title": "Ask HN: Freelancer? Seeking freelancer? (September 2024)",
                "time": 1_725_206_400,
                "type": "story"
            }),
        )
        .await;
        mount_json(
            &server,
            "/item/41000010.json",
            serde_json::json!({
                "id": 41000010,
                "text": "Acme | Rust Engineer | REMOTE",
                "time": 1_725_207_000,
                "parent": 41000002,
                "type": "comment"
            }),
        )
        .await;
        mount_json(
            &server,
            "/item/41000011.json",
            serde_json::json!({
                "id": 41000011,
                "dead": true,
                "text": "[flagged]",
                "time": 1_725_207_100,
                "parent": 41000002,
                "type": "comment"
            }),
        )
        .await;

        let (_dir, db) = open_db();
        let client = HnClient::new(server.uri()).unwrap();

        let story = sync_data(&client, &db, "whoishiring").await.unwrap();

        assert_eq!(story.hn_id, 41000002);
        assert_eq!(story.created_at.timestamp(), 1_725_206_400);
        assert_eq!(db.latest().unwrap(), Some(story.clone()));

        let first = db.after(story.id, 0).unwrap().unwrap();
        assert_eq!(first.hn_id, 41000010);
        assert_eq!(first.status, JobStatus::Active);
        let second = db.after(story.id, first.hn_id).unwrap().unwrap();
        assert_eq!(second.hn_id, 41000011);
        assert_eq!(second.status, JobStatus::Dead);

        // A restart with the same thread reuses the story and adds nothing
        let again = sync_data(&client, &db, "whoishiring").await.unwrap();
        assert_eq!(again, story);
        assert_eq!(db.job_count(story.id).unwrap(), 2);
    }

    #[tokio::test]
    async fn test_sync_fails_when_no_thread_matches() {
        let source = FakeSource::new()
            .with_submissions("whoishiring", &[3, 2, 1])
            .with_story(3, "Ask HN: Who wants to be hired?")
            .with_story(2, "Ask HN: Freelancer? Seeking freelancer?")
            .with_story(1, "Ask HN: Who wants to be hired?");
        let (_dir, db) = open_db();

        let result = sync_data(&source, &db, "whoishiring").await;

        assert!(matches!(result, Err(HiringError::ResolutionFailed { .. })));
        assert_eq!(db.latest().unwrap(), None);
    }

    #[tokio::test]
    async fn test_sync_fails_when_account_missing() {
        let (_dir, db) = open_db();

        let result = sync_data(&FakeSource::new(), &db, "whoishiring").await;

        assert!(matches!(result, Err(HiringError::RemoteFetchFailed(_))));
    }
}
