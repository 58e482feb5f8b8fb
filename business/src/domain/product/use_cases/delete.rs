use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::RecordId;

pub struct DeleteProductParams {
    pub id: RecordId,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
