use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::RecordId;

use super::model::{Product, ProductChanges};

/// Durable product collection.
///
/// Every mutating method is one load-mutate-store cycle that implementations
/// must run atomically with respect to other mutations of the same collection.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &RecordId) -> Result<Product, RepositoryError>;
    /// Appends a new product; fails with `Duplicated` if its id is taken.
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Merges `changes` onto the stored product and returns the result.
    async fn update(
        &self,
        id: &RecordId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: &RecordId) -> Result<(), RepositoryError>;
}
