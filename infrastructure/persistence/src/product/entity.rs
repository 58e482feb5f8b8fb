use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::shared::value_objects::RecordId;

/// On-disk shape of one product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub status: bool,
    pub stock: f64,
    pub category: String,
    #[serde(default)]
    pub thumbnails: Vec<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            RecordId::new(self.id),
            self.title,
            self.description,
            self.code,
            self.price,
            self.status,
            self.stock,
            self.category,
            self.thumbnails,
        )
    }
}

impl From<&Product> for ProductEntity {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            description: product.description.clone(),
            code: product.code.clone(),
            price: product.price,
            status: product.status,
            stock: product.stock,
            category: product.category.clone(),
            thumbnails: product.thumbnails.clone(),
        }
    }
}
