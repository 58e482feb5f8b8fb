use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::RecordId;

use super::entity::CartEntity;
use crate::json_collection::JsonCollection;

pub struct CartRepositoryJson {
    collection: JsonCollection<CartEntity>,
}

impl CartRepositoryJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryJson {
    async fn get_by_id(&self, id: &RecordId) -> Result<Cart, RepositoryError> {
        let entity = self
            .collection
            .load()
            .await?
            .into_iter()
            .find(|e| e.id == id.as_str())
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let entity = CartEntity::from(cart);

        self.collection
            .mutate(move |records| -> Result<(), RepositoryError> {
                if records.iter().any(|r| r.id == entity.id) {
                    return Err(RepositoryError::Duplicated);
                }
                records.push(entity);
                Ok(())
            })
            .await
    }

    async fn add_product(
        &self,
        cart_id: &RecordId,
        product_id: &RecordId,
    ) -> Result<Cart, RepositoryError> {
        self.collection
            .mutate(|records| -> Result<Cart, RepositoryError> {
                let record = records
                    .iter_mut()
                    .find(|r| r.id == cart_id.as_str())
                    .ok_or(RepositoryError::NotFound)?;

                let mut cart = record.clone().into_domain();
                cart.attach_product(product_id.clone());
                *record = CartEntity::from(&cart);
                Ok(cart)
            })
            .await
    }
}
