use poem_openapi::Object;

use business::domain::product::model::{Product, ProductChanges};

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product title (required)
    pub title: Option<String>,
    /// Product description (required)
    pub description: Option<String>,
    /// Caller-assigned product code (required, not checked for uniqueness)
    pub code: Option<String>,
    /// Unit price (required, non-zero)
    pub price: Option<f64>,
    /// Units in stock (required, non-zero)
    pub stock: Option<f64>,
    /// Product category (required)
    pub category: Option<String>,
    /// Image references, defaults to an empty list
    pub thumbnails: Option<Vec<String>>,
}

/// Partial update. Omitted fields keep their stored value.
#[derive(Debug, Clone, Object)]
#[oai(deny_unknown_fields)]
pub struct UpdateProductRequest {
    /// Accepted for compatibility and ignored; ids never change
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<f64>,
    pub category: Option<String>,
    pub status: Option<bool>,
    pub thumbnails: Option<Vec<String>>,
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            code: request.code,
            price: request.price,
            stock: request.stock,
            category: request.category,
            status: request.status,
            thumbnails: request.thumbnails,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    /// Whether the product is active
    pub status: bool,
    pub stock: f64,
    pub category: String,
    pub thumbnails: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title,
            description: product.description,
            code: product.code,
            price: product.price,
            status: product.status,
            stock: product.stock,
            category: product.category,
            thumbnails: product.thumbnails,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_drop_id_when_building_changes() {
        let request = UpdateProductRequest {
            id: Some("other".to_string()),
            title: None,
            description: None,
            code: None,
            price: Some(50.0),
            stock: None,
            category: None,
            status: None,
            thumbnails: None,
        };

        let changes = ProductChanges::from(request);

        assert_eq!(
            changes,
            ProductChanges {
                price: Some(50.0),
                ..Default::default()
            }
        );
    }
}
