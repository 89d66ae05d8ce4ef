use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client configuration for every remote feed.
#[derive(Clone)]
pub struct FeedClient {
    pub client: Client,
}

impl FeedClient {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("catalog-manager/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// GETs `url` and returns the body, failing on non-success statuses.
    pub async fn get_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}
