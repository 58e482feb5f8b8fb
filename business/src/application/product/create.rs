use std::sync::Arc;

use async_trait::async_trait;

use crate::MAX_ID_ATTEMPTS;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::shared::value_objects::RecordId;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Creating product: {}",
            params.title.as_deref().unwrap_or("<untitled>")
        ));

        let mut product = Product::new(NewProductProps {
            title: params.title,
            description: params.description,
            code: params.code,
            price: params.price,
            stock: params.stock,
            category: params.category,
            thumbnails: params.thumbnails,
        })
        .inspect_err(|e| self.logger.warn(&format!("Product rejected: {}", e)))?;

        let mut attempt = 1;
        loop {
            match self.repository.insert(&product).await {
                Ok(()) => break,
                Err(RepositoryError::Duplicated) if attempt < MAX_ID_ATTEMPTS => {
                    self.logger
                        .warn(&format!("Product id collision on {}, retrying", product.id));
                    product.id = RecordId::generate();
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
