use business::domain::catalog::stats::CatalogStats;
use business::domain::product::model::Product;
use business::domain::provider::model::Provider;

use super::escape::escape_html;

pub const EMPTY_PRODUCTS: &str = "No products available. Add your first product below!";
pub const EMPTY_PROVIDERS: &str = "No providers yet. Add your first provider below!";

/// A catalog entity that knows how to draw itself inside its list container.
pub trait Renderable {
    const EMPTY_PLACEHOLDER: &'static str;

    fn render_item(&self) -> String;

    fn wrap(items: String) -> String;
}

/// Renders a snapshot in order, or the placeholder when it is empty.
pub fn render_collection<E: Renderable>(items: &[E]) -> String {
    if items.is_empty() {
        return format!(r#"<p class="empty-state">{}</p>"#, E::EMPTY_PLACEHOLDER);
    }
    E::wrap(items.iter().map(Renderable::render_item).collect())
}

pub fn render_products(products: &[Product]) -> String {
    render_collection(products)
}

pub fn render_providers(providers: &[Provider]) -> String {
    render_collection(providers)
}

impl Renderable for Product {
    const EMPTY_PLACEHOLDER: &'static str = EMPTY_PRODUCTS;

    fn render_item(&self) -> String {
        format!(
            r#"<div class="product-card">
  <span class="product-category">{category}</span>
  <h3>{name}</h3>
  <p class="price">${price:.2}</p>
  <p class="stock">Stock: {stock}</p>
  <p class="description">{description}</p>
  <form method="post" action="/products/{id}/delete"><button type="submit" class="btn-delete">Delete</button></form>
</div>
"#,
            category = escape_html(&self.category),
            name = escape_html(&self.name),
            price = self.price,
            stock = self.stock,
            description = escape_html(&self.description),
            id = self.id,
        )
    }

    fn wrap(items: String) -> String {
        format!(r#"<div class="products-grid">{items}</div>"#)
    }
}

impl Renderable for Provider {
    const EMPTY_PLACEHOLDER: &'static str = EMPTY_PROVIDERS;

    fn render_item(&self) -> String {
        format!(
            r#"<tr>
  <td>{name}</td>
  <td>{phone}</td>
  <td>{email}</td>
  <td><form method="post" action="/providers/{id}/delete"><button type="submit" class="btn-delete">Delete</button></form></td>
</tr>
"#,
            name = escape_html(&self.name),
            phone = escape_html(&self.phone),
            email = escape_html(&self.email),
            id = self.id,
        )
    }

    fn wrap(items: String) -> String {
        format!(
            r#"<table class="providers-table"><thead><tr><th>Name</th><th>Phone</th><th>Email</th><th></th></tr></thead><tbody>{items}</tbody></table>"#
        )
    }
}

pub fn render_stats(stats: &CatalogStats) -> String {
    format!(
        r#"<div class="stats"><div class="stat"><span id="productCount">{}</span> Products</div><div class="stat"><span id="providerCount">{}</span> Providers</div></div>"#,
        stats.product_count, stats.provider_count
    )
}
