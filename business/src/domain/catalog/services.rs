use async_trait::async_trait;

use super::model::{Category, Product, ProductQuery};
use crate::domain::errors::RemoteError;
use crate::domain::shared::value_objects::ProductId;

/// Service port for the read-only product listing API.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, RemoteError>;
    async fn get_product(&self, id: &ProductId) -> Result<Product, RemoteError>;
    async fn list_categories(&self) -> Result<Vec<Category>, RemoteError>;
}
