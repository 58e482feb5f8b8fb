use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::RecordId;

pub struct GetCartByIdParams {
    pub id: RecordId,
}

#[async_trait]
pub trait GetCartByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCartByIdParams) -> Result<Cart, CartError>;
}
