use poem_openapi::Object;
use serde::Deserialize;

use business::domain::product::form::ProductForm;

/// Raw product form fields, exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize, Object)]
#[serde(default)]
pub struct ProductFormRequest {
    pub name: String,
    pub category: String,
    /// Decimal price; must be a finite non-negative number
    pub price: String,
    /// Whole units in stock
    pub stock: String,
    pub description: String,
}

impl From<ProductFormRequest> for ProductForm {
    fn from(request: ProductFormRequest) -> Self {
        Self {
            name: request.name,
            category: request.category,
            price: request.price,
            stock: request.stock,
            description: request.description,
        }
    }
}
