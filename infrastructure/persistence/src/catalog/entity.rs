use serde::{Deserialize, Serialize, de::DeserializeOwned};

use business::domain::catalog::entity::{CatalogEntity, EntityId};
use business::domain::product::model::Product;
use business::domain::provider::model::Provider;

/// Maps a catalog entity to the JSON record kept in the store.
pub trait StoredEntity: CatalogEntity {
    type Record: Serialize + DeserializeOwned;

    fn to_record(&self) -> Self::Record;
    fn from_record(record: Self::Record) -> Self;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: EntityId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub description: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.category,
            self.price,
            self.stock,
            self.description,
        )
    }
}

impl StoredEntity for Product {
    type Record = ProductEntity;

    fn to_record(&self) -> ProductEntity {
        ProductEntity {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            stock: self.stock,
            description: self.description.clone(),
        }
    }

    fn from_record(record: ProductEntity) -> Self {
        record.into_domain()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderEntity {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ProviderEntity {
    pub fn into_domain(self) -> Provider {
        Provider::from_repository(self.id, self.name, self.phone, self.email)
    }
}

impl StoredEntity for Provider {
    type Record = ProviderEntity;

    fn to_record(&self) -> ProviderEntity {
        ProviderEntity {
            id: self.id,
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    fn from_record(record: ProviderEntity) -> Self {
        record.into_domain()
    }
}
