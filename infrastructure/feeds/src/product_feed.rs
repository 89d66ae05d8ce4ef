use async_trait::async_trait;
use regex::Regex;

use business::domain::feed::errors::FeedError;
use business::domain::feed::model::FeedProduct;
use business::domain::feed::services::ProductFeedService;

use crate::client::FeedClient;

pub const DEFAULT_PRODUCT_FEED_URL: &str = "https://tranduythanh.com/datasets/CA02_products.xml";

/// Reads the remote XML product feed.
pub struct XmlProductFeed {
    client: FeedClient,
    url: String,
}

impl XmlProductFeed {
    pub fn new(client: FeedClient, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl ProductFeedService for XmlProductFeed {
    async fn fetch(&self) -> Result<Vec<FeedProduct>, FeedError> {
        let body = self
            .client
            .get_text(&self.url)
            .await
            .map_err(|e| FeedError::Fetch(e.to_string()))?;
        parse_products(&body)
    }
}

fn regex(pattern: &str) -> Result<Regex, FeedError> {
    Regex::new(pattern).map_err(|e| FeedError::Parse(e.to_string()))
}

/// Extracts every `product` element of the document.
///
/// The `catename` attribute becomes the category; the `id`, `name`, `detail`
/// and `image` children become text fields, empty when missing.
pub fn parse_products(xml: &str) -> Result<Vec<FeedProduct>, FeedError> {
    if !xml.trim_start().starts_with('<') {
        return Err(FeedError::Parse("not an XML document".to_string()));
    }

    let product_re = regex(r"(?s)<product\b([^>]*)>(.*?)</product>")?;
    let category_re = regex(r#"catename\s*=\s*["']([^"']*)["']"#)?;
    let id_re = child_regex("id")?;
    let name_re = child_regex("name")?;
    let detail_re = child_regex("detail")?;
    let image_re = child_regex("image")?;

    let products = product_re
        .captures_iter(xml)
        .map(|caps| {
            let attributes = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            FeedProduct {
                id: child_text(&id_re, body),
                name: child_text(&name_re, body),
                detail: child_text(&detail_re, body),
                image: child_text(&image_re, body),
                category: category_re
                    .captures(attributes)
                    .and_then(|c| c.get(1))
                    .map(|m| decode_text(m.as_str()))
                    .unwrap_or_default(),
            }
        })
        .collect();

    Ok(products)
}

fn child_regex(tag: &str) -> Result<Regex, FeedError> {
    regex(&format!(r"(?s)<{tag}\b[^>]*>(.*?)</{tag}>"))
}

fn child_text(re: &Regex, body: &str) -> String {
    re.captures(body)
        .and_then(|c| c.get(1))
        .map(|m| decode_text(m.as_str()))
        .unwrap_or_default()
}

fn decode_text(raw: &str) -> String {
    let text = raw.trim();
    let text = text
        .strip_prefix("<![CDATA[")
        .and_then(|t| t.strip_suffix("]]>"))
        .map(str::to_string)
        .unwrap_or_else(|| {
            text.replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&quot;", "\"")
                .replace("&apos;", "'")
                .replace("&amp;", "&")
        });
    text.trim().to_string()
}
