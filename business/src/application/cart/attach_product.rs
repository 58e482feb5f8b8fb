use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::attach_product::{AttachProductParams, AttachProductUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AttachProductUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AttachProductUseCase for AttachProductUseCaseImpl {
    async fn execute(&self, params: AttachProductParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Attaching product {} to cart {}",
            params.product_id, params.cart_id
        ));

        self.repository
            .get_by_id(&params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        // Existence is only checked at attach time; later deletions are not tracked.
        self.product_repository
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let cart = self
            .repository
            .add_product(&params.cart_id, &params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        self.logger.debug(&format!(
            "Cart {} now holds {} lines",
            cart.id,
            cart.products.len()
        ));
        Ok(cart)
    }
}
