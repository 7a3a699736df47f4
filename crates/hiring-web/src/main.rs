//! Hiring Web: the monthly Hacker News "Who is hiring?" thread, one job at a time.
//!
//! On startup, finds the current hiring thread among the `whoishiring`
//! account's latest submissions, imports any postings not yet stored in
//! SQLite, then serves the stored postings with next/previous navigation.

mod db;
mod error;
mod ingest;
mod model;
mod pagination;
mod renderer;
mod resolver;
mod routes;
mod store;
mod sync;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use clap::Parser;
use hiring_hn::{DEFAULT_API_URL, HnClient, WHO_IS_HIRING_ACCOUNT};
use tracing::info;

use crate::db::HiringDb;

/// Hiring Web: browse the current "Who is hiring?" thread.
#[derive(Parser)]
#[command(name = "hiring-web")]
struct Args {
    /// HTTP listen address.
    #[arg(long, env = "HIRING_LISTEN", default_value = "0.0.0.0:8080")]
    listen: String,

    /// SQLite database path.
    #[arg(long, env = "HIRING_DB", default_value = "hiring.db")]
    db: String,

    /// Hacker News API base URL.
    #[arg(long, env = "HIRING_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Account that posts the hiring threads.
    #[arg(long, env = "HIRING_ACCOUNT", default_value = WHO_IS_HIRING_ACCOUNT)]
    account: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hiring_web=info,hiring_hn=info".into()),
        )
        .init();

    let args = Args::parse();

    // Initialize SQLite
    let db = Arc::new(HiringDb::open(&args.db)?);

    // Serving only starts once the startup sync has succeeded
    let client = HnClient::new(&args.api_url)?;
    sync::sync_data(&client, &db, &args.account).await?;

    // Start web server
    let router = routes::create_router(Arc::clone(&db));
    let listener = tokio::net::TcpListener::bind(&args.listen).await?;

    info!(listen = %args.listen, "hiring-web started");

    axum::serve(listener, router).await?;

    Ok(())
}
