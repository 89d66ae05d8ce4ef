use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsSource {
    ThanhNien,
    Tech,
    Business,
    Science,
    World,
}

impl NewsSource {
    /// Resolves a query value. No value means the live feed; an unknown value
    /// falls back to the tech feed.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None => NewsSource::ThanhNien,
            Some(value) => value.parse().unwrap_or(NewsSource::Tech),
        }
    }

    pub fn all() -> [NewsSource; 5] {
        [
            NewsSource::ThanhNien,
            NewsSource::Tech,
            NewsSource::Business,
            NewsSource::Science,
            NewsSource::World,
        ]
    }
}

impl std::fmt::Display for NewsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewsSource::ThanhNien => write!(f, "thanhnien"),
            NewsSource::Tech => write!(f, "tech"),
            NewsSource::Business => write!(f, "business"),
            NewsSource::Science => write!(f, "science"),
            NewsSource::World => write!(f, "world"),
        }
    }
}

impl std::str::FromStr for NewsSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thanhnien" => Ok(NewsSource::ThanhNien),
            "tech" => Ok(NewsSource::Tech),
            "business" => Ok(NewsSource::Business),
            "science" => Ok(NewsSource::Science),
            "world" => Ok(NewsSource::World),
            _ => Err(format!("Invalid news source: {}", s)),
        }
    }
}

/// A feed item as delivered by the provider. `description` may contain markup.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub published: Option<DateTime<Utc>>,
    pub link: Option<String>,
}

/// A feed item ready for display: plain-text summary and optional image.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub summary: String,
    pub image: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub link: Option<String>,
}
