//! HTML page for a single job.

use chrono::SecondsFormat;

use crate::model::{Job, Story};

const HN_ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

/// Render the page showing `job` from `story`.
///
/// Job text is inserted as-is: the API already returns it as HTML.
pub fn render_job_page(story: &Story, job: &Job, job_count: usize) -> String {
    JOB_HTML
        .replace("<!-- STORY_TITLE -->", &html_escape(&story.title))
        .replace("<!-- STORY_URL -->", &item_url(story.hn_id))
        .replace("<!-- JOB_COUNT -->", &job_count.to_string())
        .replace("<!-- JOB_URL -->", &item_url(job.hn_id))
        .replace("<!-- JOB_ID -->", &job.hn_id.to_string())
        .replace(
            "<!-- POSTED_AT -->",
            &job.posted_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
        .replace("<!-- STATUS -->", job.status.as_str())
        .replace("<!-- TEXT -->", &job.text)
}

fn item_url(id: u64) -> String {
    format!("{}{}", HN_ITEM_URL, id)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const JOB_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title><!-- STORY_TITLE --></title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 800px; margin: 0 auto; padding: 2rem; background: #f6f6ef; color: #222;
        }
        h1 { font-size: 1.3rem; }
        h1 a { color: #222; text-decoration: none; }
        a { color: #ff6600; }
        .meta { color: #828282; font-size: 0.9rem; margin-bottom: 1rem; }
        .status-dead, .status-deleted { color: #b00; }
        .job {
            line-height: 1.6; padding: 1rem; background: #fff;
            border-radius: 4px; overflow-wrap: anywhere;
        }
        .nav { display: flex; justify-content: space-between; margin-top: 1.5rem; }
    </style>
</head>
<body>
    <h1><a href="<!-- STORY_URL -->"><!-- STORY_TITLE --></a></h1>
    <div class="meta">
        <!-- JOB_COUNT --> jobs &middot;
        <a href="<!-- JOB_URL -->">#<!-- JOB_ID --></a> &middot;
        posted <!-- POSTED_AT --> &middot;
        <span class="status-<!-- STATUS -->"><!-- STATUS --></span>
    </div>
    <div class="job"><!-- TEXT --></div>
    <div class="nav">
        <a href="/?before=<!-- JOB_ID -->">&larr; previous</a>
        <a href="/?after=<!-- JOB_ID -->">next &rarr;</a>
    </div>
</body>
</html>"#;
