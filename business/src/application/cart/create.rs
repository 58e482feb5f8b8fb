use std::sync::Arc;

use async_trait::async_trait;

use crate::MAX_ID_ATTEMPTS;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::create::CreateCartUseCase;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CreateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartUseCase for CreateCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        self.logger.info("Creating cart");

        for _ in 0..MAX_ID_ATTEMPTS {
            let cart = Cart::new();
            match self.repository.insert(&cart).await {
                Ok(()) => {
                    self.logger.info(&format!("Cart created with id: {}", cart.id));
                    return Ok(cart);
                }
                Err(RepositoryError::Duplicated) => {
                    self.logger
                        .warn(&format!("Cart id collision on {}, retrying", cart.id));
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(RepositoryError::Duplicated.into())
    }
}
