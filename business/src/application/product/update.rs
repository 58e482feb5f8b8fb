use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let updated_product = self
            .repository
            .update(&params.id, &params.changes)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductChanges;
    use crate::domain::shared::value_objects::RecordId;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &RecordId) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, id: &RecordId, changes: &ProductChanges) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: &RecordId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn make_product(id: &str, title: &str) -> Product {
        Product::from_repository(
            RecordId::new(id),
            title.to_string(),
            format!("{} description", title),
            format!("{}-code", id),
            2.0,
            true,
            10.0,
            "office".to_string(),
            vec![],
        )
    }

    #[tokio::test]
    async fn should_update_product_when_exists() {
        let changes = ProductChanges {
            price: Some(50.0),
            ..Default::default()
        };
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .with(eq(RecordId::new("p1")), eq(changes.clone()))
            .returning(|id, changes| {
                let mut product = make_product(id.as_str(), "Pen");
                product.apply(changes.clone());
                Ok(product)
            });

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                id: RecordId::new("p1"),
                changes,
            })
            .await
            .unwrap();

        assert_eq!(product.price, 50.0);
        assert_eq!(product.title, "Pen");
        assert_eq!(product.id.as_str(), "p1");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: RecordId::new("missing"),
                changes: ProductChanges::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
