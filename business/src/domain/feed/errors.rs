#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FeedError {
    #[error("feed.fetch_failed: {0}")]
    Fetch(String),
    #[error("feed.parse_failed: {0}")]
    Parse(String),
}
