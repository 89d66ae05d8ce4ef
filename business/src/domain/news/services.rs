use async_trait::async_trait;

use super::errors::NewsError;
use super::model::{NewsItem, NewsSource};

/// Service port for news feeds.
#[async_trait]
pub trait NewsFeedService: Send + Sync {
    async fn fetch(&self, source: NewsSource) -> Result<Vec<NewsItem>, NewsError>;
}
