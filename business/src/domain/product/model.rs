use super::errors::ProductError;
use crate::domain::shared::value_objects::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub status: bool,
    pub stock: f64,
    pub category: String,
    pub thumbnails: Vec<String>,
}

/// Caller-supplied fields for a new product. Required fields are optional
/// here so that validation can report every missing one at once.
#[derive(Debug, Clone, Default)]
pub struct NewProductProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<f64>,
    pub category: Option<String>,
    pub thumbnails: Option<Vec<String>>,
}

/// Partial update. Absent fields keep their stored value; the id is not
/// part of the set and can never change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<f64>,
    pub category: Option<String>,
    pub status: Option<bool>,
    pub thumbnails: Option<Vec<String>>,
}

fn present_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let title = present_text(props.title);
        let description = present_text(props.description);
        let code = present_text(props.code);
        let price = props.price.filter(|p| *p != 0.0);
        let stock = props.stock.filter(|s| *s != 0.0);
        let category = present_text(props.category);

        let mut missing = Vec::new();
        if title.is_none() {
            missing.push("title");
        }
        if description.is_none() {
            missing.push("description");
        }
        if code.is_none() {
            missing.push("code");
        }
        if price.is_none() {
            missing.push("price");
        }
        if stock.is_none() {
            missing.push("stock");
        }
        if category.is_none() {
            missing.push("category");
        }

        match (title, description, code, price, stock, category) {
            (
                Some(title),
                Some(description),
                Some(code),
                Some(price),
                Some(stock),
                Some(category),
            ) => Ok(Self {
                id: RecordId::generate(),
                title,
                description,
                code,
                price,
                status: true,
                stock,
                category,
                thumbnails: props.thumbnails.unwrap_or_default(),
            }),
            _ => Err(ProductError::MissingFields(missing)),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: RecordId,
        title: String,
        description: String,
        code: String,
        price: f64,
        status: bool,
        stock: f64,
        category: String,
        thumbnails: Vec<String>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            code,
            price,
            status,
            stock,
            category,
            thumbnails,
        }
    }

    /// Overwrites every field present in `changes`.
    pub fn apply(&mut self, changes: ProductChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(code) = changes.code {
            self.code = code;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(stock) = changes.stock {
            self.stock = stock;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(thumbnails) = changes.thumbnails {
            self.thumbnails = thumbnails;
        }
    }
}
