pub mod catalog;
pub mod session;
pub mod upload;

pub use upload::UploadOutcome;

use crate::config::Config;
use crate::domain::{CatalogItem, ItemKind, User, Zone};
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

/// The `{ data: ... }` wrapper every catalog endpoint responds with
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// Read side of the catalog API, abstracted so state containers can be
/// exercised against canned data.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn catalog(&self, kind: ItemKind, date: Option<NaiveDate>) -> Result<Vec<CatalogItem>>;
    async fn zones(&self) -> Result<Vec<Zone>>;
}

/// Session endpoints, cookie-backed on the wire.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Asks the server whether the session cookie is still good.
    /// Ok(None) means "not authenticated", not an error.
    async fn verify(&self) -> Result<Option<User>>;
    async fn logout(&self) -> Result<()>;
}

/// HTTP client for the storefront API. Holds the cookie store the session
/// endpoints depend on, so one client must be shared across components.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }
}
