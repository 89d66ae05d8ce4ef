#[derive(Debug, PartialEq, thiserror::Error)]
pub enum NewsError {
    #[error("news.fetch_failed: {0}")]
    Fetch(String),
    #[error("news.feed_status: {0}")]
    FeedStatus(String),
}
