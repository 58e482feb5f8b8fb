use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::RecordId;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_by_id(&self, id: &RecordId) -> Result<Cart, RepositoryError>;
    /// Appends a new cart; fails with `Duplicated` if its id is taken.
    async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError>;
    /// Runs [`Cart::attach_product`] on the stored cart and persists the
    /// whole collection in a single exclusive load-mutate-store cycle.
    async fn add_product(
        &self,
        cart_id: &RecordId,
        product_id: &RecordId,
    ) -> Result<Cart, RepositoryError>;
}
