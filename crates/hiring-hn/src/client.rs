//! Hacker News API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{HnError, Item, ItemId, User};

/// Read-only source of Hacker News items and account submissions.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch a single item by id.
    async fn get_item(&self, id: ItemId) -> Result<Item, HnError>;

    /// Fetch the ids an account has submitted, most recent first.
    async fn get_submissions(&self, account: &str) -> Result<Vec<ItemId>, HnError>;
}

/// Client for the Hacker News Firebase API.
pub struct HnClient {
    http: Client,
    base_url: String,
}

impl HnClient {
    /// Create a new client for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, HnError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch an item.
    pub async fn item(&self, id: ItemId) -> Result<Item, HnError> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        debug!(url = %url, "fetching item");

        self.fetch::<Item>(&url).await?.ok_or_else(|| HnError::NotFound {
            kind: "item",
            id: id.to_string(),
        })
    }

    /// Fetch an account.
    pub async fn user(&self, account: &str) -> Result<User, HnError> {
        let url = format!("{}/user/{}.json", self.base_url, account);
        debug!(url = %url, "fetching user");

        self.fetch::<User>(&url).await?.ok_or_else(|| HnError::NotFound {
            kind: "user",
            id: account.to_string(),
        })
    }

    /// GET a JSON document. The API answers `null` for unknown ids.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, HnError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.map_err(|e| {
                HnError::InvalidResponse(format!(
                    "request failed ({}): failed to read response: {}",
                    status, e
                ))
            })?;
            return Err(HnError::InvalidResponse(format!(
                "request failed ({}): {}",
                status, text
            )));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ItemSource for HnClient {
    async fn get_item(&self, id: ItemId) -> Result<Item, HnError> {
        self.item(id).await
    }

    async fn get_submissions(&self, account: &str) -> Result<Vec<ItemId>, HnError> {
        Ok(self.user(account).await?.submitted)
    }
}
