use crate::domain::catalog::entity::{CatalogEntity, EntityId, EntityKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub description: String,
}

/// A validated product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductProps {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub description: String,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: EntityId,
        name: String,
        category: String,
        price: f64,
        stock: u32,
        description: String,
    ) -> Self {
        Self {
            id,
            name,
            category,
            price,
            stock,
            description,
        }
    }
}

impl CatalogEntity for Product {
    const KIND: EntityKind = EntityKind::Product;

    type Draft = NewProductProps;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewProductProps) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            stock: draft.stock,
            description: draft.description,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Product::from_repository(
                1,
                "Laptop Pro 15".to_string(),
                "Electronics".to_string(),
                1299.99,
                25,
                "High-performance laptop with 16GB RAM and 512GB SSD".to_string(),
            ),
            Product::from_repository(
                2,
                "Wireless Headphones".to_string(),
                "Electronics".to_string(),
                199.99,
                50,
                "Premium noise-canceling headphones with 30-hour battery life".to_string(),
            ),
            Product::from_repository(
                3,
                "Office Chair Pro".to_string(),
                "Home".to_string(),
                349.99,
                15,
                "Ergonomic office chair with lumbar support and adjustable height".to_string(),
            ),
        ]
    }

    fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty() && self.price.is_finite() && self.price >= 0.0
    }
}
