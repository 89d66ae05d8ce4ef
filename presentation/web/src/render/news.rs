use business::domain::news::model::{NewsArticle, NewsSource};

use super::escape::escape_html;

pub const EMPTY_NEWS: &str = "No news available.";
pub const NEWS_ERROR: &str = "Error loading news. Please try again later.";

pub fn render_source_selector(selected: NewsSource) -> String {
    let options: String = NewsSource::all()
        .iter()
        .map(|source| {
            let marker = if *source == selected { " selected" } else { "" };
            format!(r#"<option value="{source}"{marker}>{source}</option>"#)
        })
        .collect();

    format!(
        r#"<form method="get" action="/news" class="news-source"><select name="source">{options}</select><button type="submit">Load</button></form>"#
    )
}

pub fn render_news(source: NewsSource, articles: &[NewsArticle]) -> String {
    let selector = render_source_selector(source);
    if articles.is_empty() {
        return format!(r#"{selector}<p class="empty-state">{EMPTY_NEWS}</p>"#);
    }

    let items: String = articles.iter().map(render_article).collect();
    format!(r#"{selector}<div class="rss-list">{items}</div>"#)
}

fn render_article(article: &NewsArticle) -> String {
    let title = escape_html(&article.title);
    let image = article
        .image
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{title}" class="rss-item-image">"#,
                escape_html(src)
            )
        })
        .unwrap_or_default();
    let date = article
        .published
        .map(|d| format!(r#"<div class="date">{}</div>"#, d.format("%Y-%m-%d %H:%M")))
        .unwrap_or_default();
    let read_more = article
        .link
        .as_deref()
        .map(|link| {
            format!(
                r#"<a class="read-more" href="{}" target="_blank" rel="noopener">Read more</a>"#,
                escape_html(link)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="rss-item">{image}<div class="rss-item-content"><h3>{title}</h3><p>{summary}</p>{date}{read_more}</div></div>"#,
        summary = escape_html(&article.summary),
    )
}
