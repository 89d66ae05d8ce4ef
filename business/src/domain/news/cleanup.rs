use regex::Regex;

use super::model::{NewsArticle, NewsItem};

/// Maximum number of characters kept in a summary.
pub const SUMMARY_LIMIT: usize = 300;

fn replace_all(text: &str, pattern: &str, with: &str) -> String {
    Regex::new(pattern)
        .map(|re| re.replace_all(text, with).into_owned())
        .unwrap_or_else(|_| text.to_string())
}

/// Source of the first `<img>` in the description, if any.
pub fn extract_image(description: &str) -> Option<String> {
    Regex::new(r#"<img[^>]+src="([^">]+)""#)
        .ok()?
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Strips markup and entities, collapses whitespace and caps the length.
///
/// The ellipsis is appended when the raw description is longer than the
/// limit, even if the stripped text is shorter.
pub fn clean_description(description: &str) -> String {
    let text = replace_all(description, r"<img[^>]*>", "");
    let text = replace_all(&text, r"<a[^>]*>", "");
    let text = replace_all(&text, r"</a>", "");
    let text = replace_all(&text, r"<[^>]*>", "");
    let text = replace_all(&text, r"&[^;]+;", " ");
    let text = replace_all(&text, r"\s+", " ");

    let mut summary: String = text.trim().chars().take(SUMMARY_LIMIT).collect();
    if description.chars().count() > SUMMARY_LIMIT {
        summary.push_str("...");
    }
    summary
}

impl From<NewsItem> for NewsArticle {
    fn from(item: NewsItem) -> Self {
        Self {
            image: extract_image(&item.description),
            summary: clean_description(&item.description),
            title: item.title,
            published: item.published,
            link: item.link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_extract_first_image_source() {
        let description =
            r#"<a href="x"><img width="1" src="https://cdn/a.jpg" /></a><img src="b.jpg">"#;
        assert_eq!(
            extract_image(description),
            Some("https://cdn/a.jpg".to_string())
        );
    }

    #[test]
    fn should_return_none_without_image() {
        assert_eq!(extract_image("plain text"), None);
    }

    #[test]
    fn should_strip_tags_and_entities() {
        let description = r#"<a href="/x"><img src="a.jpg"></a><p>Hello&nbsp;<b>world</b></p>"#;
        assert_eq!(clean_description(description), "Hello world");
    }

    #[test]
    fn should_collapse_whitespace() {
        assert_eq!(clean_description("  a \n\n b\t c  "), "a b c");
    }

    #[test]
    fn should_cap_summary_and_append_ellipsis() {
        let description = "x".repeat(450);
        let summary = clean_description(&description);
        assert_eq!(summary.chars().count(), SUMMARY_LIMIT + 3);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn should_append_ellipsis_based_on_raw_length() {
        let description = format!("<p>{}</p>{}", "short", " ".repeat(400));
        assert_eq!(clean_description(&description), "short...");
    }

    #[test]
    fn should_build_article_from_item() {
        let article = NewsArticle::from(NewsItem {
            title: "Title".to_string(),
            description: r#"<img src="pic.png">Body"#.to_string(),
            published: None,
            link: Some("https://example.com".to_string()),
        });
        assert_eq!(article.image.as_deref(), Some("pic.png"));
        assert_eq!(article.summary, "Body");
        assert_eq!(article.link.as_deref(), Some("https://example.com"));
    }
}
