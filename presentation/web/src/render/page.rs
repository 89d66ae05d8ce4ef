use business::domain::catalog::stats::CatalogStats;
use business::domain::news::model::NewsSource;
use business::domain::product::model::Product;
use business::domain::provider::model::Provider;
use business::domain::session::model::Session;

use super::catalog::{render_products, render_providers, render_stats};
use super::escape::escape_html;
use super::feed::render_category_filter;
use super::news::render_source_selector;
use super::session::render_session;

/// Everything the index page needs, read once per request.
pub struct PageView<'a> {
    pub stats: CatalogStats,
    pub session: &'a Session,
    pub products: &'a [Product],
    pub providers: &'a [Provider],
}

/// Inline error fragment. `detail` carries the underlying cause, if any.
pub fn render_error(message: &str, detail: Option<&str>) -> String {
    let detail = detail
        .map(|d| format!("<br><small>{}</small>", escape_html(d)))
        .unwrap_or_default();
    format!(
        r#"<div class="error">{}{detail}</div>"#,
        escape_html(message)
    )
}

pub fn render_page(view: &PageView<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Catalog Manager</title>
</head>
<body>
<header>
<h1>Catalog Manager</h1>
{session}
{stats}
</header>
<main>
<section id="products">
<h2>Products</h2>
<div id="productsContainer">{products}</div>
<form method="post" action="/products" class="product-form">
  <input type="text" name="name" placeholder="Product name" required>
  <input type="text" name="category" placeholder="Category">
  <input type="number" name="price" step="0.01" min="0" placeholder="Price" required>
  <input type="number" name="stock" min="0" placeholder="Stock" required>
  <textarea name="description" placeholder="Description"></textarea>
  <button type="submit">Add Product</button>
</form>
</section>
<section id="providers">
<h2>Providers</h2>
<div id="providersContainer">{providers}</div>
<form method="post" action="/providers" class="provider-form">
  <input type="text" name="name" placeholder="Provider name" required>
  <input type="tel" name="phone" placeholder="Phone">
  <input type="email" name="email" placeholder="Email">
  <button type="submit">Add Provider</button>
</form>
</section>
<section id="feed">
<h2>Product Feed</h2>
{category_filter}
</section>
<section id="weather">
<h2>Weather</h2>
<form method="get" action="/weather"><input type="text" name="city" id="cityInput" placeholder="Enter city name"><button type="submit">Get Weather</button></form>
</section>
<section id="news">
<h2>News</h2>
{news_selector}
</section>
</main>
</body>
</html>
"#,
        session = render_session(view.session),
        stats = render_stats(&view.stats),
        products = render_products(view.products),
        providers = render_providers(view.providers),
        category_filter = render_category_filter(&[], None),
        news_selector = render_source_selector(NewsSource::ThanhNien),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::entity::CatalogEntity;

    #[test]
    fn should_compose_all_panels() {
        let products = Product::seed();
        let providers = Provider::seed();
        let session = Session::logged_in("Ann");
        let html = render_page(&PageView {
            stats: CatalogStats {
                product_count: products.len(),
                provider_count: providers.len(),
            },
            session: &session,
            products: &products,
            providers: &providers,
        });

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("User: Ann"));
        assert!(html.contains(r#"<span id="productCount">3</span>"#));
        assert!(html.contains("Wireless Headphones"));
        assert!(html.contains("Green Energy Corp"));
    }

    #[test]
    fn should_show_placeholders_for_empty_catalog() {
        let session = Session::logged_out();
        let html = render_page(&PageView {
            stats: CatalogStats::default(),
            session: &session,
            products: &[],
            providers: &[],
        });
        assert!(html.contains(crate::render::catalog::EMPTY_PRODUCTS));
        assert!(html.contains(crate::render::catalog::EMPTY_PROVIDERS));
    }

    #[test]
    fn should_escape_error_detail() {
        let html = render_error("Error loading products", Some("<timeout>"));
        assert!(html.contains("&lt;timeout&gt;"));
    }
}
