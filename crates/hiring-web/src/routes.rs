//! Web routes for browsing the current hiring thread.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::db::HiringDb;
use crate::error::HiringError;
use crate::pagination::{Cursor, select_job};
use crate::renderer::render_job_page;
use crate::store::StoryStore;

/// Shared application state.
pub struct AppState {
    pub db: Arc<HiringDb>,
}

/// Create the web router.
pub fn create_router(db: Arc<HiringDb>) -> Router {
    let state = Arc::new(AppState { db });

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Raw strings so a malformed value falls back instead of rejecting the request
async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, HiringError> {
    let story = state
        .db
        .latest()?
        .ok_or_else(|| HiringError::NotFound("hiring story".to_string()))?;
    info!(hn_id = story.hn_id, title = %story.title, "found hiring story");

    let cursor = Cursor::from_params(
        params.get("after").map(String::as_str),
        params.get("before").map(String::as_str),
    );
    let job = select_job(state.db.as_ref(), &story, cursor)?;
    info!(hn_id = job.hn_id, "found hiring job");

    let job_count = state.db.job_count(story.id)?;
    Ok(Html(render_job_page(&story, &job, job_count)))
}

async fn health() -> &'static str {
    "ok"
}
