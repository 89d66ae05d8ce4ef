use async_trait::async_trait;

use super::errors::FeedError;
use super::model::FeedProduct;

/// Service port for the remote, read-only product feed.
#[async_trait]
pub trait ProductFeedService: Send + Sync {
    async fn fetch(&self) -> Result<Vec<FeedProduct>, FeedError>;
}
