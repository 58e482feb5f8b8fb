use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::RecordId;

use super::entity::ProductEntity;
use crate::json_collection::JsonCollection;

pub struct ProductRepositoryJson {
    collection: JsonCollection<ProductEntity>,
}

impl ProductRepositoryJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = self.collection.load().await?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<Product, RepositoryError> {
        let entity = self
            .collection
            .load()
            .await?
            .into_iter()
            .find(|e| e.id == id.as_str())
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        let entity = ProductEntity::from(product);

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

    async fn update(
        &self,
        id: &RecordId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        self.collection
            .mutate(|records| -> Result<Product, RepositoryError> {
                let record = records
                    .iter_mut()
                    .find(|r| r.id == id.as_str())
                    .ok_or(RepositoryError::NotFound)?;

                let mut product = record.clone().into_domain();
                product.apply(changes.clone());
                *record = ProductEntity::from(&product);
                Ok(product)
            })
            .await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), RepositoryError> {
        self.collection
            .mutate(|records| -> Result<(), RepositoryError> {
                let before = records.len();
                records.retain(|r| r.id != id.as_str());
                if records.len() == before {
                    return Err(RepositoryError::NotFound);
                }
                Ok(())
            })
            .await
    }
}
