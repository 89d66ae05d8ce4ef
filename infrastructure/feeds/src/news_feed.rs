use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::Deserialize;

use business::domain::news::errors::NewsError;
use business::domain::news::model::{NewsItem, NewsSource};
use business::domain::news::services::NewsFeedService;

use crate::client::FeedClient;

pub const DEFAULT_NEWS_RSS_URL: &str = "https://thanhnien.vn/rss/giao-duc.rss";
pub const DEFAULT_RSS2JSON_ENDPOINT: &str = "https://api.rss2json.com/v1/api.json";

const MISSING_DESCRIPTION: &str = "No description available";
const PUB_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Deserialize)]
struct ConverterResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    items: Vec<ConverterItem>,
}

#[derive(Debug, Deserialize)]
struct ConverterItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(rename = "pubDate", default)]
    pub_date: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

impl ConverterItem {
    fn into_item(self) -> NewsItem {
        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .or(self.content.filter(|c| !c.trim().is_empty()))
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string());

        NewsItem {
            title: self.title,
            description,
            published: self.pub_date.as_deref().and_then(parse_pub_date),
            link: self.link.filter(|l| !l.is_empty()),
        }
    }
}

fn parse_pub_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), PUB_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Live RSS feed read through the rss2json converter, plus built-in
/// headlines for the topic sources.
pub struct RssNewsFeed {
    client: FeedClient,
    rss_url: String,
    converter_url: String,
}

impl RssNewsFeed {
    pub fn new(client: FeedClient, rss_url: String, converter_url: String) -> Self {
        Self {
            client,
            rss_url,
            converter_url,
        }
    }

    async fn fetch_live(&self) -> Result<Vec<NewsItem>, NewsError> {
        let response = self
            .client
            .client
            .get(&self.converter_url)
            .query(&[("rss_url", self.rss_url.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| NewsError::Fetch(e.to_string()))?;

        let body: ConverterResponse = response
            .json()
            .await
            .map_err(|e| NewsError::Fetch(e.to_string()))?;

        parse_converter_response(body)
    }
}

fn parse_converter_response(body: ConverterResponse) -> Result<Vec<NewsItem>, NewsError> {
    if body.status != "ok" {
        return Err(NewsError::FeedStatus(
            body.message.unwrap_or(body.status),
        ));
    }
    Ok(body.items.into_iter().map(ConverterItem::into_item).collect())
}

#[async_trait]
impl NewsFeedService for RssNewsFeed {
    async fn fetch(&self, source: NewsSource) -> Result<Vec<NewsItem>, NewsError> {
        match source {
            NewsSource::ThanhNien => self.fetch_live().await,
            topic => Ok(simulated_items(topic, Utc::now())),
        }
    }
}

/// Fixed headlines for the topic sources, dated relative to `now`.
pub fn simulated_items(source: NewsSource, now: DateTime<Utc>) -> Vec<NewsItem> {
    let entries: [(&str, &str, i64); 3] = match source {
        NewsSource::Business => [
            (
                "Global Markets Show Strong Growth",
                "Stock markets around the world post impressive gains...",
                3,
            ),
            (
                "Startup Raises $100M in Series B Funding",
                "Fast-growing startup secures major investment round...",
                6,
            ),
            (
                "New Trade Agreement Boosts International Commerce",
                "Countries finalize deal expected to increase trade volumes...",
                10,
            ),
        ],
        NewsSource::Science => [
            (
                "Scientists Discover New Species in Deep Ocean",
                "Marine biologists identify previously unknown creatures...",
                4,
            ),
            (
                "Breakthrough in Cancer Treatment Research",
                "New therapy shows promising results in clinical trials...",
                7,
            ),
            (
                "Space Mission Returns with Rare Samples",
                "Spacecraft brings back materials for scientific analysis...",
                12,
            ),
        ],
        NewsSource::World => [
            (
                "International Summit Addresses Climate Goals",
                "World leaders meet to discuss environmental initiatives...",
                1,
            ),
            (
                "Cultural Festival Celebrates Global Diversity",
                "Annual event brings together traditions from around the world...",
                9,
            ),
            (
                "New Educational Initiative Launched Globally",
                "Program aims to improve access to quality education worldwide...",
                11,
            ),
        ],
        NewsSource::Tech | NewsSource::ThanhNien => [
            (
                "New AI Model Breaks Performance Records",
                "Researchers announce breakthrough in artificial intelligence capabilities...",
                2,
            ),
            (
                "Quantum Computing Makes Major Advance",
                "Scientists achieve new milestone in quantum computing stability...",
                5,
            ),
            (
                "Tech Giants Announce Collaboration on Open Standards",
                "Major technology companies unite to develop new industry standards...",
                8,
            ),
        ],
    };

    entries
        .into_iter()
        .map(|(title, description, hours_ago)| NewsItem {
            title: title.to_string(),
            description: description.to_string(),
            published: Some(now - Duration::hours(hours_ago)),
            link: None,
        })
        .collect()
}
