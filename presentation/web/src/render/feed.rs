use business::domain::feed::model::{ALL_CATEGORIES, FeedView};

use super::escape::escape_html;

pub const EMPTY_FEED: &str = "No products found for this category.";
pub const FEED_ERROR: &str = "Error loading products from XML. Please try again later.";

/// Category selector; the `all` option always comes first.
pub fn render_category_filter(categories: &[String], selected: Option<&str>) -> String {
    let selected = selected.unwrap_or(ALL_CATEGORIES);
    let option = |value: &str, label: &str| {
        let marker = if value == selected { " selected" } else { "" };
        format!(
            r#"<option value="{}"{marker}>{}</option>"#,
            escape_html(value),
            escape_html(label)
        )
    };

    let options: String = std::iter::once(option(ALL_CATEGORIES, "All Categories"))
        .chain(categories.iter().map(|c| option(c, c)))
        .collect();

    format!(
        r#"<form method="get" action="/feed/products" class="category-filter"><select name="category" id="categoryFilter">{options}</select><button type="submit">Filter</button></form>"#
    )
}

pub fn render_feed_table(view: &FeedView) -> String {
    let filter = render_category_filter(&view.categories, view.selected.as_deref());
    if view.products.is_empty() {
        return format!(r#"{filter}<p class="empty-state">{EMPTY_FEED}</p>"#);
    }

    let rows: String = view
        .products
        .iter()
        .map(|p| {
            format!(
                r#"<tr><td class="product-id">#{id}</td><td><img src="{image}" alt="{name}" class="product-img"></td><td class="product-name">{name}</td><td><span class="product-category">{category}</span></td><td class="product-detail">{detail}</td></tr>"#,
                id = escape_html(&p.id),
                image = escape_html(&p.image),
                name = escape_html(&p.name),
                category = escape_html(&p.category),
                detail = escape_html(&p.detail),
            )
        })
        .collect();

    format!(
        r#"{filter}<table class="products-table"><thead><tr><th>ID</th><th>Image</th><th>Name</th><th>Category</th><th>Details</th></tr></thead><tbody>{rows}</tbody></table>"#
    )
}
