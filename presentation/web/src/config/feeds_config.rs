use std::env;
use std::time::Duration;

use feeds::news_feed::{DEFAULT_NEWS_RSS_URL, DEFAULT_RSS2JSON_ENDPOINT};
use feeds::product_feed::DEFAULT_PRODUCT_FEED_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote sources for the feed and news panels.
#[derive(Debug, Clone)]
pub struct FeedsConfig {
    pub product_feed_url: String,
    pub news_rss_url: String,
    pub rss2json_endpoint: String,
    pub timeout: Duration,
}

impl FeedsConfig {
    /// Environment variables:
    /// - PRODUCT_FEED_URL, NEWS_RSS_URL, RSS2JSON_ENDPOINT (defaults: public endpoints)
    /// - HTTP_TIMEOUT_SECS: per-request timeout (default: 30)
    pub fn from_env() -> Self {
        let timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            product_feed_url: var_or("PRODUCT_FEED_URL", DEFAULT_PRODUCT_FEED_URL),
            news_rss_url: var_or("NEWS_RSS_URL", DEFAULT_NEWS_RSS_URL),
            rss2json_endpoint: var_or("RSS2JSON_ENDPOINT", DEFAULT_RSS2JSON_ENDPOINT),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
