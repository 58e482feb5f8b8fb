use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::RecordId;

pub struct AttachProductParams {
    pub cart_id: RecordId,
    pub product_id: RecordId,
}

#[async_trait]
pub trait AttachProductUseCase: Send + Sync {
    async fn execute(&self, params: AttachProductParams) -> Result<Cart, CartError>;
}
